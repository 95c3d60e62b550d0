use clap::Parser;

/// Draw the curve stored across a run of numbered `.dat` segment files.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Common filename stem: segments are `<prefix>0.dat` .. `<prefix>N-1.dat`
    #[arg(value_name = "FILE_PREFIX")]
    pub file_prefix: String,

    /// How many segment files to read, starting at index 0
    #[arg(value_name = "NUMBER_OF_FILES")]
    pub number_of_files: usize,
}

use structopt::StructOpt;

#[derive(StructOpt)]
pub struct Opts {
    /// Cross-layout skybox image (4x3 grid of tiles).
    #[structopt(long)]
    input: std::path::PathBuf,
    /// Directory the six face images are written into.
    #[structopt(long)]
    output_dir: std::path::PathBuf,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::from_args();

    skybox_tools::split_file(&opts.input, &opts.output_dir)
}

// Writes man pages for service-studio and each of its subcommands

use clap::CommandFactory;
use service_studio::cli::Cli;
use std::path::PathBuf;

fn main() -> std::io::Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("man"));
    std::fs::create_dir_all(&out_dir)?;

    let cmd = Cli::command();

    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd.clone()).render(&mut buffer)?;
    std::fs::write(out_dir.join("service-studio.1"), buffer)?;

    for sub in cmd.get_subcommands() {
        let mut buffer = Vec::new();
        clap_mangen::Man::new(sub.clone()).render(&mut buffer)?;
        let page = out_dir.join(format!("service-studio-{}.1", sub.get_name()));
        std::fs::write(&page, buffer)?;
    }

    println!("Man pages written to {}", out_dir.display());
    Ok(())
}

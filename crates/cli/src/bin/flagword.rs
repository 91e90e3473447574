use anyhow::Result;

fn main() -> Result<()> {
    flagword_cli::main_entry()
}

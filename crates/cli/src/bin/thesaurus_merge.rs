use anyhow::Result;

fn main() -> Result<()> {
    thesaurus_cli::main_entry()
}

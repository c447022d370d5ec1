use anyhow::Result;

fn main() -> Result<()> {
    petitc_driver::main()
}

fn main() -> anyhow::Result<()> {
    let command_line_interface = schemacast::cli::CommandLineInterface::load();
    command_line_interface.run()
}

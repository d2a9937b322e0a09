// ABOUTME: Process entry point - wires the REPL driver to stdin/stdout

fn main() -> std::io::Result<()> {
    mini_scheme::repl::run()
}

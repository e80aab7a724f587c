// process-wide log sink, initialised once by each binary
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // prompts share the terminal, keep the report lines free of color codes.
        .with_ansi(false)
        .without_time()
        .init();
}

use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVES: &str = "info";

pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));
    install(filter);
}

pub fn init_with_filter(directives: &str) -> bool {
    install(EnvFilter::new(directives))
}

// JSON logs + timestamps; decision events carry their fields flattened.
fn install(filter: EnvFilter) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .flatten_event(true)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_install_is_a_no_op() {
        init();
        assert!(!init_with_filter("debug"));
    }
}

use hello_proxy_core::config::Config;

pub fn run(config: &Config) -> anyhow::Result<()> {
    print!("{}", toml::to_string_pretty(&redacted(config))?);
    Ok(())
}

/// Copy of `config` safe to print
fn redacted(config: &Config) -> Config {
    let mut printable = config.clone();
    if printable.translate.credential.is_some() {
        printable.translate.credential = Some("<redacted>".to_string());
    }
    printable
}

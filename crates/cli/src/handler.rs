use eyre::EyreHandler;
use itertools::Itertools;
use splits_config::ConfigError;
use std::{error::Error, fmt};

/// Renders reports as a deduplicated cause chain, followed by a hint for errors the user can fix.
#[derive(Debug, Default)]
pub struct Handler;

impl EyreHandler for Handler {
    fn display(&self, error: &(dyn Error + 'static), f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Display;
        dedup_chain(error).into_iter().format("; ").fmt(f)
    }

    fn debug(&self, error: &(dyn Error + 'static), f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return fmt::Debug::fmt(error, f);
        }
        f.write_str(&render(error))
    }
}

/// Renders `error` the way the `splits` binary prints it on failure.
pub fn render(error: &(dyn Error + 'static)) -> String {
    let mut causes = dedup_chain(error).into_iter();
    let mut out = causes.next().unwrap_or_default();
    for cause in causes {
        out.push_str("\n  caused by: ");
        out.push_str(&cause);
    }
    if let Some(hint) = hint(error) {
        out.push_str("\n\nhint: ");
        out.push_str(&hint);
    }
    out
}

/// Returns the messages of `error` and its sources, dropping a source whose message is already
/// contained in the previous one.
pub fn dedup_chain(error: &(dyn Error + 'static)) -> Vec<String> {
    let mut causes: Vec<String> = std::iter::successors(Some(error), |&err| err.source())
        .map(|cause| cause.to_string().trim().to_string())
        .collect();
    causes.dedup_by(|b, a| a.contains(b.as_str()));
    causes
}

fn hint(error: &(dyn Error + 'static)) -> Option<String> {
    std::iter::successors(Some(error), |&err| err.source()).find_map(|err| {
        match err.downcast_ref::<ConfigError>() {
            Some(ConfigError::SecretFile { path, .. }) => Some(format!(
                "check that `{}` is a readable dotenv file, or point `--env-file` at another one",
                path.display()
            )),
            None => None,
        }
    })
}

/// Installs the [`eyre`] and [`panic`](mod@std::panic) hooks as the global ones.
///
/// Reports use [`Handler`] unless `SPLITS_DEBUG` is set, in which case the full `color-eyre`
/// report with span traces is printed instead. Panics always get the `color-eyre` report.
pub fn install() {
    let panic_section =
        "This is a bug. Consider reporting it at https://github.com/0xSplits/splits-contracts";
    let builder = color_eyre::config::HookBuilder::default().panic_section(panic_section);

    if std::env::var_os("SPLITS_DEBUG").is_some() {
        if let Err(e) = builder.install() {
            debug!("failed to install color-eyre hooks: {e}");
        }
        return;
    }

    let (panic_hook, _) = builder.into_hooks();
    panic_hook.install();
    if let Err(e) = eyre::set_hook(Box::new(|_| Box::new(Handler))) {
        debug!("failed to install eyre error hook: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{io, path::PathBuf};

    fn secret_file_error() -> ConfigError {
        ConfigError::SecretFile {
            path: PathBuf::from(".env.ci"),
            source: dotenvy::Error::Io(io::Error::other("permission denied")),
        }
    }

    #[test]
    fn renders_secret_file_failure_with_hint() {
        let report = eyre::Report::new(secret_file_error()).wrap_err("failed to load configuration");
        let error: &(dyn Error + 'static) = report.as_ref();

        let rendered = render(error);
        assert!(rendered.starts_with(
            "failed to load configuration\n  caused by: failed to read secret file `.env.ci`"
        ));
        assert_eq!(rendered.matches("permission denied").count(), 1, "{rendered}");
        assert!(rendered.ends_with(
            "hint: check that `.env.ci` is a readable dotenv file, or point `--env-file` at another one"
        ));
    }

    #[test]
    fn no_hint_for_other_errors() {
        let report = eyre::eyre!("found 2 shape defect(s)");
        let error: &(dyn Error + 'static) = report.as_ref();
        assert_eq!(render(error), "found 2 shape defect(s)");
    }

    #[test]
    fn drops_repeated_source_message() {
        let err = secret_file_error();
        assert_eq!(
            dedup_chain(&err),
            ["failed to read secret file `.env.ci`", "permission denied"]
        );
    }
}

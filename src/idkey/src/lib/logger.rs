use slog::{Drain, Level, Logger};

/// Writes each record as a single line. Informational messages are printed bare; every other
/// level is prefixed with its name so debug output stands apart from regular progress.
pub struct IdkeyFormat<D>
where
    D: slog_term::Decorator,
{
    decorator: D,
}

impl<D: slog_term::Decorator> IdkeyFormat<D> {
    pub fn new(decorator: D) -> IdkeyFormat<D> {
        IdkeyFormat { decorator }
    }
}

impl<D: slog_term::Decorator> Drain for IdkeyFormat<D> {
    type Ok = ();
    type Err = std::io::Error;

    fn log(
        &self,
        record: &slog::Record<'_>,
        values: &slog::OwnedKVList,
    ) -> Result<Self::Ok, Self::Err> {
        self.decorator.with_record(record, values, |decorator| {
            if record.level() != Level::Info {
                decorator.start_level()?;
                write!(decorator, "{}: ", record.level().as_str())?;
                decorator.start_whitespace()?;
            }

            decorator.start_msg()?;
            writeln!(decorator, "{}", record.msg())?;
            decorator.flush()?;
            Ok(())
        })
    }
}

/// Maps the `-v`/`-q` balance to the most verbose level that is still shown. `None` silences
/// logging entirely.
pub fn level_for(verbose_level: i64) -> Option<Level> {
    match verbose_level {
        i64::MIN..=-4 => None,
        -3 => Some(Level::Critical),
        -2 => Some(Level::Error),
        -1 => Some(Level::Warning),
        0 => Some(Level::Info),
        1 => Some(Level::Debug),
        _ => Some(Level::Trace),
    }
}

/// Create the root logger, writing to stderr.
pub fn create_root_logger(verbose_level: i64) -> Logger {
    let Some(level) = level_for(verbose_level) else {
        return Logger::root(slog::Discard, slog::o!());
    };

    let decorator = slog_term::TermDecorator::new().stderr().build();
    let drain = IdkeyFormat::new(decorator).fuse();
    let drain = slog::LevelFilter::new(drain, level).fuse();
    let drain = slog_async::Async::new(drain).build().fuse();

    Logger::root(drain, slog::o!("version" => env!("CARGO_PKG_VERSION")))
}

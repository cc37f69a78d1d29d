use slog::Logger;

pub trait Environment {
    fn get_logger(&self) -> &Logger;
    fn get_verbose_level(&self) -> i64;
}

pub struct EnvironmentImpl {
    logger: Logger,
    verbose_level: i64,
}

impl EnvironmentImpl {
    pub fn new(logger: Logger) -> Self {
        Self {
            logger,
            verbose_level: 0,
        }
    }

    pub fn with_verbose_level(self, verbose_level: i64) -> Self {
        Self {
            verbose_level,
            ..self
        }
    }
}

impl Environment for EnvironmentImpl {
    fn get_logger(&self) -> &Logger {
        &self.logger
    }

    fn get_verbose_level(&self) -> i64 {
        self.verbose_level
    }
}

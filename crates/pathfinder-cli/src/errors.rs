use console::style;
use pathfinder_core::PathfinderError;
use std::fmt;

/// Enhanced error type with suggestions
pub struct CliError {
    pub message: String,
    pub context: Option<String>,
    pub suggestions: Vec<String>,
    pub help_command: Option<String>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            suggestions: Vec::new(),
            help_command: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_help(mut self, command: impl Into<String>) -> Self {
        self.help_command = Some(command.into());
        self
    }

    pub fn display(&self) {
        eprintln!("{} {}\n", style("✗").red().bold(), style(&self.message).red().bold());

        if let Some(ref context) = self.context {
            eprintln!("{}", context);
            eprintln!();
        }

        if !self.suggestions.is_empty() {
            eprintln!("{}", style("To fix this:").yellow().bold());
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, suggestion);
            }
            eprintln!();
        }

        if let Some(ref help_cmd) = self.help_command {
            eprintln!("{} {}", style("Need help?").cyan(), style(help_cmd).cyan().bold());
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Create error for text without any coordinate pair
pub fn no_coordinates() -> CliError {
    CliError::new("No coordinates found")
        .with_context("The input did not contain any coordinate pair.\n\nExpected pairs like: 34.0522, -118.2437")
        .with_suggestion("Both numbers need a decimal point: write 34.0, -118.0 instead of 34, -118")
        .with_suggestion("Separate the numbers with a comma, a pipe, or whitespace")
        .with_help("Run: pathfinder plan --help")
}

/// Create error for input over the point ceiling
pub fn too_many_points(count: usize, limit: usize) -> CliError {
    CliError::new("Too many points")
        .with_context(format!("The input holds {} points but the limit is {}.", count, limit))
        .with_suggestion("Raise the limit: pathfinder plan --max-points <N>")
        .with_suggestion("Or set max_points in pathfinder.toml")
        .with_help("Run: pathfinder config")
}

/// Create error for an unknown route
pub fn route_not_found(id: &str) -> CliError {
    CliError::new("Route not found")
        .with_context(format!("No stored route matches the given ID.\n\nID: {}", id))
        .with_suggestion("List stored routes: pathfinder routes list")
        .with_suggestion("Check --data-dir if routes were saved elsewhere")
        .with_help("Run: pathfinder routes --help")
}

/// Create error for a route ID that is not a UUID
pub fn invalid_route_id(id: &str) -> CliError {
    CliError::new("Invalid route ID")
        .with_context(format!("Route IDs are UUIDs as printed by `routes list`.\n\nID: {}", id))
        .with_suggestion("Copy the ID from: pathfinder routes list")
        .with_help("Run: pathfinder routes --help")
}

/// Create error for invalid configuration
pub fn invalid_config(key: &str, reason: &str) -> CliError {
    CliError::new(format!("Invalid configuration: {}", key))
        .with_context(format!("Configuration value is invalid.\n\nReason: {}", reason))
        .with_suggestion("Check pathfinder.toml for syntax errors")
        .with_suggestion("Check PATHFINDER_* environment variables")
        .with_help("Run: pathfinder config")
}

/// Convert anyhow::Error to CliError with context
pub fn from_anyhow(error: anyhow::Error) -> CliError {
    if let Some(core) = error.downcast_ref::<PathfinderError>() {
        return match core {
            PathfinderError::NoCoordinates => no_coordinates(),
            PathfinderError::TooManyPoints { count, limit } => too_many_points(*count, *limit),
            PathfinderError::RouteNotFound { id } => route_not_found(id),
            PathfinderError::InvalidRouteId { id } => invalid_route_id(id),
            PathfinderError::ConfigInvalid { key, reason } => invalid_config(key, reason),
            PathfinderError::ConfigNotFound { path } => CliError::new("Config file not found")
                .with_context(format!("Path: {}", path.display()))
                .with_suggestion("Check the --config path"),
            other => CliError::new(other.to_string()),
        };
    }

    // anyhow context hides the root cause from the message
    let message = format!("{:#}", error);
    if message.contains("No such file or directory") {
        CliError::new("File not found")
            .with_context(format!("Error: {}", message))
            .with_suggestion("Check the file path and try again")
    } else if message.contains("ermission denied") {
        CliError::new("Permission denied")
            .with_context(format!("Error: {}", message))
            .with_suggestion("Check file permissions")
    } else {
        CliError::new(message)
    }
}

//! Value types parsed from CLI arguments

/// Output format for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            _ => Err(format!(
                "Unknown output format: {s}. Valid formats: text, json, yaml"
            )),
        }
    }
}

/// Hyperparameter group selectable by the params command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamGroup {
    RandomForest,
    RandomForestSearch,
    LogisticRegression,
}

impl std::str::FromStr for ParamGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "random-forest" | "rf" => Ok(ParamGroup::RandomForest),
            "random-forest-search" | "rf-search" | "search" => Ok(ParamGroup::RandomForestSearch),
            "logistic-regression" | "logreg" | "lr" => Ok(ParamGroup::LogisticRegression),
            _ => Err(format!(
                "Unknown parameter group: {s}. Valid groups: random-forest, random-forest-search, logistic-regression"
            )),
        }
    }
}

impl std::fmt::Display for ParamGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamGroup::RandomForest => write!(f, "random-forest"),
            ParamGroup::RandomForestSearch => write!(f, "random-forest-search"),
            ParamGroup::LogisticRegression => write!(f, "logistic-regression"),
        }
    }
}

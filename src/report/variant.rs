// * Report variants: which init API is used and which fields get printed.

use clap::ValueEnum;

// * Framework initialization entry point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitMode {
    // * Context::init(path)
    File,
    // * Context::init_params(["--confile", path, ...])
    Params,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Id,
    Input1S,
    TestInt,
    SleepMsec,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Id => "ID",
            Field::Input1S => "Input1_S",
            Field::TestInt => "TestInt",
            Field::SleepMsec => "SleepMsec",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportVariant {
    /// File init; name and input sensor
    File,
    /// File init; name, input sensor and loop delay
    FileTimer,
    /// Parameter init; name, object id and input sensor
    Params,
    /// Parameter init; name, object id, input sensor and test value
    #[default]
    ParamsFull,
}

impl ReportVariant {
    pub const ALL: [ReportVariant; 4] = [
        ReportVariant::File,
        ReportVariant::FileTimer,
        ReportVariant::Params,
        ReportVariant::ParamsFull,
    ];

    pub fn init_mode(self) -> InitMode {
        match self {
            ReportVariant::File | ReportVariant::FileTimer => InitMode::File,
            ReportVariant::Params | ReportVariant::ParamsFull => InitMode::Params,
        }
    }

    /// Printed fields, in output order.
    pub fn fields(self) -> &'static [Field] {
        match self {
            ReportVariant::File => &[Field::Name, Field::Input1S],
            ReportVariant::FileTimer => &[Field::Name, Field::Input1S, Field::SleepMsec],
            ReportVariant::Params => &[Field::Name, Field::Id, Field::Input1S],
            ReportVariant::ParamsFull => &[Field::Name, Field::Id, Field::Input1S, Field::TestInt],
        }
    }

    pub fn reads_timer(self) -> bool {
        self.fields().contains(&Field::SleepMsec)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// "<Label>: <value>" lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_init_modes() {
        assert_eq!(ReportVariant::File.init_mode(), InitMode::File);
        assert_eq!(ReportVariant::FileTimer.init_mode(), InitMode::File);
        assert_eq!(ReportVariant::Params.init_mode(), InitMode::Params);
        assert_eq!(ReportVariant::ParamsFull.init_mode(), InitMode::Params);
    }

    #[test]
    fn test_fields_unique_and_name_first() {
        for variant in ReportVariant::ALL {
            let fields = variant.fields();
            let unique: HashSet<_> = fields.iter().collect();
            assert_eq!(unique.len(), fields.len(), "{:?} repeats a field", variant);
            assert_eq!(fields[0], Field::Name);
        }
    }

    #[test]
    fn test_only_file_timer_reads_timer() {
        let readers: Vec<_> = ReportVariant::ALL
            .into_iter()
            .filter(|v| v.reads_timer())
            .collect();
        assert_eq!(readers, vec![ReportVariant::FileTimer]);
    }

    #[test]
    fn test_cli_names() {
        let names: Vec<_> = ReportVariant::ALL
            .iter()
            .filter_map(|v| v.to_possible_value())
            .map(|p| p.get_name().to_string())
            .collect();
        assert_eq!(names, ["file", "file-timer", "params", "params-full"]);
    }
}

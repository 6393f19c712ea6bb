//! `ls` options: the flag schema and the validated options record.

use minsh_types::{ParamSchema, ToolArgs, ToolSchema};

use crate::tools::{parse_args, ArgError};

/// Words accepted by `--sort=WORD`.
const SORT_WORDS: &str = "none, extension, size, time";

/// The single ordering criterion of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Case-insensitive name, ascending.
    #[default]
    Name,
    /// Modification time, newest first.
    Time,
    /// Size, largest first.
    Size,
    /// Extension, ascending.
    Extension,
    /// Filesystem enumeration order.
    None,
}

impl SortMode {
    /// Parse a `--sort` word.
    pub fn from_word(word: &str) -> Result<Self, ArgError> {
        match word {
            "none" => Ok(SortMode::None),
            "extension" => Ok(SortMode::Extension),
            "size" => Ok(SortMode::Size),
            "time" => Ok(SortMode::Time),
            other => Err(ArgError::InvalidValue {
                option: "--sort".to_string(),
                value: other.to_string(),
                expected: SORT_WORDS.to_string(),
            }),
        }
    }

    /// Pick one mode out of every requested selector.
    ///
    /// Precedence: unsorted > time > size > extension > name.
    pub fn resolve(requested: &[SortMode]) -> Self {
        const PRECEDENCE: [SortMode; 4] =
            [SortMode::None, SortMode::Time, SortMode::Size, SortMode::Extension];
        PRECEDENCE
            .into_iter()
            .find(|mode| requested.contains(mode))
            .unwrap_or_default()
    }
}

/// Options for one `ls` invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingOptions {
    /// Paths to list; empty means the working directory.
    pub targets: Vec<String>,
    /// Show names starting with `.`.
    pub include_hidden: bool,
    /// Show hidden names but never the implied `.` and `..`.
    pub almost_all: bool,
    /// Long format.
    pub long: bool,
    /// Human-readable sizes in long format.
    pub human_readable: bool,
    /// Ordering criterion.
    pub sort: SortMode,
    /// Reverse the final order.
    pub reverse: bool,
}

impl ListingOptions {
    /// The `ls` flag table.
    pub fn schema() -> ToolSchema {
        ToolSchema::new("ls", "List directory contents")
            .usage("ls [OPTION]... [FILE]...")
            .param(ParamSchema::flag("long", "Use a long listing format").with_aliases(["-l"]))
            .param(
                ParamSchema::flag("all", "Do not ignore entries starting with .")
                    .with_aliases(["-a", "--all"]),
            )
            .param(
                ParamSchema::flag("almost-all", "Do not list implied . and ..")
                    .with_aliases(["-A", "--almost-all"]),
            )
            .param(
                ParamSchema::flag("human-readable", "Print sizes like 1.5 KiB")
                    .with_aliases(["-h", "--human-readable"]),
            )
            .param(
                ParamSchema::flag("time", "Sort by modification time, newest first")
                    .with_aliases(["-t"]),
            )
            .param(ParamSchema::flag("size", "Sort by file size, largest first").with_aliases(["-S"]))
            .param(
                ParamSchema::flag("extension", "Sort alphabetically by entry extension")
                    .with_aliases(["-X"]),
            )
            .param(
                ParamSchema::flag("unsorted", "Do not sort; list entries in directory order")
                    .with_aliases(["-U", "-f"]),
            )
            .param(
                ParamSchema::flag("reverse", "Reverse order while sorting")
                    .with_aliases(["-r", "--reverse"]),
            )
            .param(
                ParamSchema::value(
                    "sort",
                    "Sort by WORD instead of name: none -U, extension -X, size -S, time -t",
                )
                .with_aliases(["--sort"]),
            )
            .example("List the current directory", "ls")
            .example("Hidden files in long format", "ls -la")
            .example("Largest first, human-readable", "ls -lhS /var/log")
            .example("Oldest first", "ls -t -r")
    }

    /// Build options from parsed arguments, validating the sort word.
    pub fn from_args(args: &ToolArgs) -> Result<Self, ArgError> {
        let mut requested = Vec::new();
        if args.has_flag("unsorted") {
            requested.push(SortMode::None);
        }
        if args.has_flag("time") {
            requested.push(SortMode::Time);
        }
        if args.has_flag("size") {
            requested.push(SortMode::Size);
        }
        if args.has_flag("extension") {
            requested.push(SortMode::Extension);
        }
        // `--sort=` with no word means no word was given
        if let Some(word) = args.get_named("sort")
            && !word.is_empty()
        {
            requested.push(SortMode::from_word(word)?);
        }

        let almost_all = args.has_flag("almost-all");
        Ok(Self {
            targets: args.positional.clone(),
            include_hidden: args.has_flag("all") || almost_all,
            almost_all,
            long: args.has_flag("long"),
            human_readable: args.has_flag("human-readable"),
            sort: SortMode::resolve(&requested),
            reverse: args.has_flag("reverse"),
        })
    }

    /// Parse raw tokens straight into options.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self, ArgError> {
        let args = parse_args(&Self::schema(), tokens)?;
        Self::from_args(&args)
    }
}

// command_line.rs — CLI argument parsing and command dispatch
//
// `mie` exposes the icon engine outside a browser: resolve single names,
// detect the provider for an address, print the stylesheet, or resolve a
// whole listing read from stdin.  Settings come from an optional JSON
// settings file and the MIE environment variable; explicit flags win over
// both.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::config::{Config, IconSize, JsonFileSettingsStore, MemorySettingsStore, SettingsStore, MIE_ENV_VAR_NAME};
use crate::ehm::AppError;
use crate::file_signal::{EntryKind, FileSignal};
use crate::icon_pack::{ActivePack, IconPackCatalog};
use crate::provider::Provider;
use crate::reference_tables::ReferenceTables;
use crate::resolver::IconResolver;
use crate::stylesheet;





#[derive(Parser, Debug)]
#[command(
    name = "mie",
    version = env!("MIE_VERSION_STRING"),
    long_version = concat!(env!("MIE_VERSION_STRING"), " (built ", env!("MIE_BUILD_TIMESTAMP"), ")"),
    about = "Material file and folder icons for Git hosting pages",
    long_about = "Resolves file and folder names to material icon ids the way the browser extension does, \
                  and prints the stylesheet it injects."
)]
pub struct CommandLine {
    /// JSON settings file (iconSize, iconPack)
    #[arg(long, global = true, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Debug logging (overrides MIE_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the icon for one entry name
    Resolve(ResolveArgs),

    /// Show which Git host provider handles a page address
    Detect {
        /// Page address
        url: String,
    },

    /// Print the icon size stylesheet for the configured size tier
    Css {
        /// Size tier to use instead of the configured one (sm, md, lg, xl)
        #[arg(long, value_parser = parse_size, conflicts_with = "all")]
        size: Option<IconSize>,

        /// Every tier, keyed on the body size attribute
        #[arg(long)]
        all: bool,
    },

    /// Resolve every line of stdin; a trailing '/' marks a directory
    Render(TableArgs),
}

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Entry name as shown in the listing
    pub name: String,

    /// The entry is a directory
    #[arg(long)]
    pub dir: bool,

    /// The entry is a submodule
    #[arg(long)]
    pub submodule: bool,

    /// The entry is a symbolic link
    #[arg(long)]
    pub symlink: bool,

    #[command(flatten)]
    pub table: TableArgs,
}

#[derive(Args, Debug)]
pub struct TableArgs {
    /// Resolve as for a light page theme
    #[arg(long)]
    pub light: bool,

    /// Icon pack (angular, angular_ngrx, react, react_redux, vue, vue_vuex, nest, none)
    #[arg(long, value_parser = parse_pack)]
    pub pack: Option<ActivePack>,

    /// Icon theme manifest (JSON) to use instead of the built-in tables
    #[arg(long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,
}





fn parse_size(value: &str) -> Result<IconSize, AppError> {
    IconSize::from_name (value).ok_or_else (|| invalid_setting ("size", value))
}

fn parse_pack(value: &str) -> Result<ActivePack, AppError> {
    match ActivePack::from_name (value) {
        ActivePack::None if value != "none" => Err (invalid_setting ("pack", value)),
        pack => Ok (pack),
    }
}

fn invalid_setting(key: &str, value: &str) -> AppError {
    AppError::InvalidSetting { key: key.into(), value: value.into() }
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl CommandLine
//
////////////////////////////////////////////////////////////////////////////////

impl CommandLine {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  load_config
    //
    //  Settings file (if any) plus MIE.  Bad MIE entries are reported on
    //  stderr and otherwise ignored.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn load_config(&self) -> Result<Config, AppError> {
        let store: Box<dyn SettingsStore> = match &self.settings {
            Some (path) => Box::new (JsonFileSettingsStore::open (path)?),
            None        => Box::new (MemorySettingsStore::new()),
        };

        let config = Config::load_with_environment (store.as_ref());

        for error in &config.validate_environment_variable().errors {
            eprintln!("Warning: {} entry '{}': {}", MIE_ENV_VAR_NAME, error.entry, error.message);
        }

        Ok (config)
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  execute
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn execute(&self, config: &Config, input: &mut dyn BufRead, out: &mut dyn Write) -> Result<(), AppError> {
        match &self.command {
            Command::Resolve (args) => {
                let resolver = build_resolver (args.table.manifest.as_deref())?;
                let pack     = args.table.pack.unwrap_or (config.settings().icon_pack);
                let kind     = EntryKind {
                    is_directory: args.dir,
                    is_submodule: args.submodule,
                    is_symlink:   args.symlink,
                };

                let signal = FileSignal::new (args.name.trim(), kind)
                    .ok_or_else (|| AppError::InvalidArg ("Error:   entry name is empty".into()))?;

                if let Some (resolution) = resolver.resolve_detailed (&signal, args.table.light, pack) {
                    writeln!(out, "{}\t{:?}", resolution.icon, resolution.source)?;
                }
            }

            Command::Detect { url } => match Provider::detect (url) {
                Some (provider) => writeln!(out, "{provider}")?,
                None            => return Err (AppError::InvalidArg (format!("Error:   no provider for '{url}'"))),
            },

            Command::Css { all: true, .. } => write!(out, "{}", stylesheet::size_css())?,

            Command::Css { size, .. } => {
                let size = size.unwrap_or (config.settings().icon_size);
                write!(out, "{}{}", stylesheet::base_rule(), stylesheet::size_rule (size))?;
            }

            Command::Render (args) => {
                let resolver = build_resolver (args.manifest.as_deref())?;
                let pack     = args.pack.unwrap_or (config.settings().icon_pack);
                render_listing (&resolver, args.light, pack, input, out)?;
            }
        }

        Ok (())
    }
}





fn build_resolver(manifest: Option<&Path>) -> Result<IconResolver, AppError> {
    let tables = match manifest {
        Some (path) => ReferenceTables::from_manifest_file (path)?,
        None        => ReferenceTables::with_defaults(),
    };

    Ok (IconResolver::new (tables, IconPackCatalog::bundled()))
}





////////////////////////////////////////////////////////////////////////////////
//
//  render_listing
//
//  One "<name>\t<icon>" line per non-blank input line.
//
////////////////////////////////////////////////////////////////////////////////

fn render_listing(
    resolver: &IconResolver,
    light:    bool,
    pack:     ActivePack,
    input:    &mut dyn BufRead,
    out:      &mut dyn Write,
) -> Result<(), AppError> {
    for line in input.lines() {
        let line = line?;
        let entry = line.trim();

        let (name, is_directory) = match entry.strip_suffix ('/') {
            Some (name) => (name, true),
            None        => (entry, false),
        };

        let kind = EntryKind { is_directory, ..EntryKind::default() };

        let Some (signal) = FileSignal::new (name, kind) else {
            continue;
        };

        if let Some (icon) = resolver.resolve (&signal, light, pack) {
            writeln!(out, "{entry}\t{icon}")?;
        }
    }

    Ok (())
}

// material-icons-ext - Icon Mapping
// Named constants and default lookup tables for file/folder icons.
//
// Icon identifiers are the stem of an `.svg` asset bundled with the
// extension (e.g. "typescript" → icons/typescript.svg).  Tables are plain
// (key, icon) slices so they can be checked for duplicates and turned into
// HashMaps by ReferenceTables.


////////////////////////////////////////////////////////////////////////////////
//
//  Named Constants — fixed icons
//
////////////////////////////////////////////////////////////////////////////////

pub const ICON_FILE:            &str = "file";
pub const ICON_FOLDER:          &str = "folder";
pub const ICON_FOLDER_GIT:      &str = "folder-git";
pub const ICON_FOLDER_SYMLINK:  &str = "folder-symlink";

/// File suffix of every bundled icon asset.
pub const ICON_ASSET_SUFFIX:    &str = ".svg";





////////////////////////////////////////////////////////////////////////////////
//
//  DEFAULT_FILE_NAME_ICONS
//
//  Whole file names that carry their own icon regardless of extension.
//  Keys are matched exactly first, then against the lowercased name, so
//  mixed-case keys only ever hit on an exact match.
//
////////////////////////////////////////////////////////////////////////////////

pub const DEFAULT_FILE_NAME_ICONS: &[(&str, &str)] = &[
    // Node / JavaScript tooling
    ("package.json",          "nodejs"),
    ("package-lock.json",     "nodejs"),
    (".nvmrc",                "nodejs"),
    (".npmrc",                "npm"),
    (".npmignore",            "npm"),
    ("yarn.lock",             "yarn"),
    (".yarnrc",               "yarn"),
    ("pnpm-lock.yaml",        "pnpm"),
    ("pnpm-workspace.yaml",   "pnpm"),
    ("tsconfig.json",         "tsconfig"),
    ("jsconfig.json",         "jsconfig"),
    (".babelrc",              "babel"),
    ("babel.config.js",       "babel"),
    (".eslintrc",             "eslint"),
    (".eslintrc.js",          "eslint"),
    (".eslintrc.json",        "eslint"),
    (".eslintignore",         "eslint"),
    (".prettierrc",           "prettier"),
    (".prettierignore",       "prettier"),
    ("webpack.config.js",     "webpack"),
    ("vite.config.ts",        "vite"),
    ("vite.config.js",        "vite"),
    ("rollup.config.js",      "rollup"),
    ("jest.config.js",        "jest"),
    ("next.config.js",        "next"),
    ("nuxt.config.js",        "nuxt"),
    ("angular.json",          "angular"),
    ("vercel.json",           "vercel"),
    ("now.json",              "vercel"),

    // Git
    (".gitignore",            "git"),
    (".gitattributes",        "git"),
    (".gitmodules",           "git"),
    (".gitkeep",              "git"),
    ("CODEOWNERS",            "codeowners"),

    // Docker / CI
    ("dockerfile",            "docker"),
    ("docker-compose.yml",    "docker"),
    ("docker-compose.yaml",   "docker"),
    (".dockerignore",         "docker"),
    (".travis.yml",           "travis"),
    (".gitlab-ci.yml",        "gitlab"),
    ("jenkinsfile",           "jenkins"),
    (".codeclimate.yml",      "code-climate"),
    ("azure-pipelines.yml",   "azure-pipelines"),

    // Build systems
    ("makefile",              "makefile"),
    ("cmakelists.txt",        "cmake"),
    ("cargo.toml",            "cargo"),
    ("cargo.lock",            "cargo"),
    ("go.mod",                "go-mod"),
    ("go.sum",                "go-mod"),
    ("build.gradle",          "gradle"),
    ("gradlew",               "gradle"),
    ("pom.xml",               "maven"),
    ("gemfile",               "gemfile"),
    ("gemfile.lock",          "gemfile"),
    ("requirements.txt",      "python-misc"),
    ("pipfile",               "python-misc"),
    ("pyproject.toml",        "python-misc"),
    ("composer.json",         "composer"),
    ("mix.exs",               "elixir"),

    // Editor / environment
    (".editorconfig",         "editorconfig"),
    (".env",                  "tune"),
    (".env.local",            "tune"),
    (".env.example",          "tune"),
    (".browserslistrc",       "browserlist"),

    // Documentation
    ("readme.md",             "readme"),
    ("readme",                "readme"),
    ("changelog.md",          "changelog"),
    ("changelog",             "changelog"),
    ("license",               "certificate"),
    ("license.md",            "certificate"),
    ("license.txt",           "certificate"),
    ("contributing.md",       "contributing"),
    ("authors",               "authors"),
    ("todo.md",               "todo"),
    ("robots.txt",            "robots"),
    ("favicon.ico",           "favicon"),
];





////////////////////////////////////////////////////////////////////////////////
//
//  DEFAULT_FOLDER_NAME_ICONS
//
//  Well-known folder names.  Keys are lowercase; the engine retries with
//  the lowercased name when an exact match misses.
//
////////////////////////////////////////////////////////////////////////////////

pub const DEFAULT_FOLDER_NAME_ICONS: &[(&str, &str)] = &[
    // Version control / editors
    (".git",                  "folder-git"),
    (".github",               "folder-github"),
    (".gitlab",               "folder-gitlab"),
    (".vscode",               "folder-vscode"),
    (".idea",                 "folder-intellij"),
    (".husky",                "folder-husky"),
    (".circleci",             "folder-circleci"),

    // Source
    ("src",                   "folder-src"),
    ("source",                "folder-src"),
    ("lib",                   "folder-lib"),
    ("libs",                  "folder-lib"),
    ("app",                   "folder-app"),
    ("components",            "folder-components"),
    ("hooks",                 "folder-hook"),
    ("views",                 "folder-views"),
    ("pages",                 "folder-views"),
    ("layouts",               "folder-layout"),
    ("services",              "folder-controller"),
    ("controllers",           "folder-controller"),
    ("models",                "folder-database"),
    ("store",                 "folder-store"),
    ("utils",                 "folder-utils"),
    ("helpers",               "folder-helper"),
    ("types",                 "folder-typescript"),
    ("api",                   "folder-api"),
    ("routes",                "folder-routes"),
    ("middleware",            "folder-middleware"),
    ("plugins",               "folder-plugin"),
    ("shared",                "folder-shared"),
    ("core",                  "folder-core"),

    // Build output / dependencies
    ("dist",                  "folder-dist"),
    ("build",                 "folder-dist"),
    ("out",                   "folder-dist"),
    ("bin",                   "folder-dist"),
    ("target",                "folder-target"),
    ("node_modules",          "folder-node"),
    ("vendor",                "folder-packages"),
    ("packages",              "folder-packages"),

    // Docs / tests
    ("docs",                  "folder-docs"),
    ("doc",                   "folder-docs"),
    ("test",                  "folder-test"),
    ("tests",                 "folder-test"),
    ("__tests__",             "folder-test"),
    ("spec",                  "folder-test"),
    ("e2e",                   "folder-test"),
    ("benches",               "folder-benchmark"),
    ("examples",              "folder-examples"),

    // Resources
    ("assets",                "folder-resource"),
    ("resources",             "folder-resource"),
    ("static",                "folder-resource"),
    ("public",                "folder-public"),
    ("images",                "folder-images"),
    ("img",                   "folder-images"),
    ("icons",                 "folder-images"),
    ("fonts",                 "folder-font"),
    ("styles",                "folder-css"),
    ("css",                   "folder-css"),
    ("i18n",                  "folder-i18n"),
    ("locales",               "folder-i18n"),

    // Config / ops
    ("config",                "folder-config"),
    ("configs",               "folder-config"),
    ("scripts",               "folder-scripts"),
    ("tools",                 "folder-tools"),
    ("docker",                "folder-docker"),
    ("ci",                    "folder-ci"),
    ("vercel",                "folder-vercel"),
    (".vercel",               "folder-vercel"),
];





////////////////////////////////////////////////////////////////////////////////
//
//  DEFAULT_EXTENSION_ICONS
//
//  Extension → icon.  Keys carry no leading dot and may be compound
//  ("xml.dist") when the extension parser recognizes them as a unit.
//
////////////////////////////////////////////////////////////////////////////////

pub const DEFAULT_EXTENSION_ICONS: &[(&str, &str)] = &[
    // JavaScript / TypeScript
    ("js",               "javascript"),
    ("mjs",              "javascript"),
    ("cjs",              "javascript"),
    ("jsx",              "react"),
    ("ts",               "typescript"),
    ("mts",              "typescript"),
    ("cts",              "typescript"),
    ("tsx",              "react_ts"),
    ("json",             "json"),
    ("json5",            "json"),

    // Web
    ("html",             "html"),
    ("htm",              "html"),
    ("css",              "css"),
    ("scss",             "sass"),
    ("sass",             "sass"),
    ("less",             "less"),
    ("styl",             "stylus"),
    ("svg",              "svg"),
    ("wasm",             "webassembly"),

    // Systems
    ("rs",               "rust"),
    ("c",                "c"),
    ("h",                "h"),
    ("cpp",              "cpp"),
    ("cc",               "cpp"),
    ("cxx",              "cpp"),
    ("hpp",              "hpp"),
    ("hxx",              "hpp"),
    ("go",               "go"),
    ("zig",              "zig"),
    ("asm",              "assembly"),
    ("s",                "assembly"),

    // JVM / .NET
    ("java",             "java"),
    ("jar",              "jar"),
    ("class",            "javaclass"),
    ("kt",               "kotlin"),
    ("kts",              "kotlin"),
    ("scala",            "scala"),
    ("cs",               "csharp"),
    ("fs",               "fsharp"),
    ("vb",               "visualstudio"),
    ("sln",              "visualstudio"),
    ("csproj",           "visualstudio"),

    // Scripting
    ("py",               "python"),
    ("pyc",              "python-misc"),
    ("rb",               "ruby"),
    ("php",              "php"),
    ("pl",               "perl"),
    ("pm",               "perl"),
    ("lua",              "lua"),
    ("sh",               "console"),
    ("zsh",              "console"),
    ("fish",             "console"),
    ("ps1",              "powershell"),
    ("psm1",             "powershell"),
    ("bat",              "console"),
    ("cmd",              "console"),
    ("ex",               "elixir"),
    ("exs",              "elixir"),
    ("erl",              "erlang"),
    ("hs",               "haskell"),
    ("clj",              "clojure"),
    ("dart",             "dart"),
    ("swift",            "swift"),
    ("jl",               "julia"),
    ("nim",              "nim"),

    // Frameworks
    ("vue",              "vue"),
    ("svelte",           "svelte"),
    ("graphql",          "graphql"),
    ("gql",              "graphql"),
    ("prisma",           "prisma"),
    ("jinja",            "jinja"),
    ("jinja2",           "jinja"),
    ("j2",               "jinja"),
    ("hbs",              "handlebars"),
    ("pug",              "pug"),

    // Data / config
    ("xml",              "xml"),
    ("xml.dist",         "xml"),
    ("xml.dist.sample",  "xml"),
    ("yml",              "yaml"),
    ("yaml",             "yaml"),
    ("yml.dist",         "yaml"),
    ("toml",             "toml"),
    ("ini",              "settings"),
    ("cfg",              "settings"),
    ("conf",             "settings"),
    ("env",              "tune"),
    ("csv",              "table"),
    ("tsv",              "table"),
    ("sql",              "database"),
    ("db",               "database"),
    ("sqlite",           "database"),
    ("lock",             "lock"),
    ("log",              "log"),
    ("tf",               "terraform"),
    ("tfvars",           "terraform"),
    ("proto",            "proto"),

    // Documents
    ("md",               "markdown"),
    ("markdown",         "markdown"),
    ("mdx",              "mdx"),
    ("rst",              "markdown"),
    ("txt",              "document"),
    ("pdf",              "pdf"),
    ("doc",              "word"),
    ("docx",             "word"),
    ("xls",              "table"),
    ("xlsx",             "table"),
    ("ppt",              "powerpoint"),
    ("pptx",             "powerpoint"),
    ("tex",              "tex"),

    // Media
    ("png",              "image"),
    ("jpg",              "image"),
    ("jpeg",             "image"),
    ("gif",              "image"),
    ("bmp",              "image"),
    ("webp",             "image"),
    ("ico",              "image"),
    ("mp3",              "audio"),
    ("wav",              "audio"),
    ("flac",             "audio"),
    ("ogg",              "audio"),
    ("mp4",              "video"),
    ("mov",              "video"),
    ("webm",             "video"),
    ("mkv",              "video"),
    ("ttf",              "font"),
    ("otf",              "font"),
    ("woff",             "font"),
    ("woff2",            "font"),

    // Archives / keys
    ("zip",              "zip"),
    ("gz",               "zip"),
    ("tgz",              "zip"),
    ("tar",              "zip"),
    ("7z",               "zip"),
    ("rar",              "zip"),
    ("pem",              "key"),
    ("key",              "key"),
    ("pub",              "key"),
    ("crt",              "certificate"),
    ("cer",              "certificate"),
];





////////////////////////////////////////////////////////////////////////////////
//
//  DEFAULT_LANGUAGE_ID_ICONS
//
//  Editor language identifiers → icon.  The engine probes this table with
//  the file extension, so it catches extensions that happen to equal a
//  language id ("d", "diff", "properties") without listing them twice.
//
////////////////////////////////////////////////////////////////////////////////

pub const DEFAULT_LANGUAGE_ID_ICONS: &[(&str, &str)] = &[
    ("bat",              "console"),
    ("c",                "c"),
    ("clojure",          "clojure"),
    ("coffeescript",     "coffee"),
    ("cpp",              "cpp"),
    ("csharp",           "csharp"),
    ("css",              "css"),
    ("d",                "d"),
    ("dart",             "dart"),
    ("diff",             "diff"),
    ("dockerfile",       "docker"),
    ("elixir",           "elixir"),
    ("fsharp",           "fsharp"),
    ("go",               "go"),
    ("graphql",          "graphql"),
    ("groovy",           "groovy"),
    ("handlebars",       "handlebars"),
    ("haskell",          "haskell"),
    ("html",             "html"),
    ("ini",              "settings"),
    ("java",             "java"),
    ("javascript",       "javascript"),
    ("json",             "json"),
    ("julia",            "julia"),
    ("kotlin",           "kotlin"),
    ("latex",            "tex"),
    ("less",             "less"),
    ("log",              "log"),
    ("lua",              "lua"),
    ("makefile",         "makefile"),
    ("markdown",         "markdown"),
    ("nim",              "nim"),
    ("perl",             "perl"),
    ("php",              "php"),
    ("powershell",       "powershell"),
    ("properties",       "settings"),
    ("pug",              "pug"),
    ("python",           "python"),
    ("r",                "r"),
    ("razor",            "razor"),
    ("ruby",             "ruby"),
    ("rust",             "rust"),
    ("scala",            "scala"),
    ("shellscript",      "console"),
    ("sql",              "database"),
    ("svelte",           "svelte"),
    ("swift",            "swift"),
    ("terraform",        "terraform"),
    ("toml",             "toml"),
    ("typescript",       "typescript"),
    ("vue",              "vue"),
    ("xml",              "xml"),
    ("yaml",             "yaml"),
    ("zig",              "zig"),
];





////////////////////////////////////////////////////////////////////////////////
//
//  DEFAULT_FALLBACK_FILE_NAME_ICONS / DEFAULT_FALLBACK_EXTENSION_ICONS
//
//  Default editor language associations, already mapped to icons.  Only
//  consulted once every primary table has missed.
//
////////////////////////////////////////////////////////////////////////////////

pub const DEFAULT_FALLBACK_FILE_NAME_ICONS: &[(&str, &str)] = &[
    ("Jakefile",         "javascript"),
    ("Rakefile",         "ruby"),
    ("Podfile",          "ruby"),
    ("Vagrantfile",      "ruby"),
    ("Snakefile",        "python"),
    ("SConstruct",       "python"),
    ("SConscript",       "python"),
    ("PKGBUILD",         "console"),
    ("APKBUILD",         "console"),
    (".bashrc",          "console"),
    (".bash_profile",    "console"),
    (".zshrc",           "console"),
    (".profile",         "console"),
    (".jshintrc",        "json"),
    (".jscsrc",          "json"),
    ("composer.lock",    "json"),
    ("gnumakefile",      "makefile"),
    ("bsdmakefile",      "makefile"),
    ("containerfile",    "docker"),
];

pub const DEFAULT_FALLBACK_EXTENSION_ICONS: &[(&str, &str)] = &[
    ("bash",             "console"),
    ("ksh",              "console"),
    ("csh",              "console"),
    ("tcsh",             "console"),
    ("ebuild",           "console"),
    ("pyi",              "python"),
    ("rpy",              "python"),
    ("gyp",              "python"),
    ("gemspec",          "ruby"),
    ("podspec",          "ruby"),
    ("rake",             "ruby"),
    ("es6",              "javascript"),
    ("jsm",              "javascript"),
    ("pac",              "javascript"),
    ("hh",               "cpp"),
    ("ino",              "cpp"),
    ("ipp",              "cpp"),
    ("tpp",              "cpp"),
    ("ctp",              "php"),
    ("phtml",            "php"),
    ("xht",              "html"),
    ("shtml",            "html"),
    ("mdown",            "markdown"),
    ("mkdn",             "markdown"),
    ("jsonc",            "json"),
    ("webmanifest",      "json"),
    ("cshtml",           "razor"),
    ("bib",              "tex"),
];





////////////////////////////////////////////////////////////////////////////////
//
//  DEFAULT_LIGHT_*_ICONS
//
//  Light-theme variants.  Consulted only when the host page renders light,
//  and only replace a result when the same key has an entry here.
//
////////////////////////////////////////////////////////////////////////////////

pub const DEFAULT_LIGHT_FILE_NAME_ICONS: &[(&str, &str)] = &[
    (".codeclimate.yml", "code-climate_light"),
    ("vercel.json",      "vercel_light"),
    ("now.json",         "vercel_light"),
    ("next.config.js",   "next_light"),
    ("CODEOWNERS",       "codeowners_light"),
];

pub const DEFAULT_LIGHT_FOLDER_NAME_ICONS: &[(&str, &str)] = &[
    ("vercel",           "folder-vercel_light"),
    (".vercel",          "folder-vercel_light"),
];

pub const DEFAULT_LIGHT_EXTENSION_ICONS: &[(&str, &str)] = &[
    ("jinja",            "jinja_light"),
    ("jinja2",           "jinja_light"),
    ("j2",               "jinja_light"),
    ("toml",             "toml_light"),
    ("prisma",           "prisma_light"),
];





////////////////////////////////////////////////////////////////////////////////
//
//  ICON_PACK_ASSETS
//
//  Framework icon-pack assets.  These never appear in the tables above;
//  the pack resolver finds them by probing the asset catalog.
//
////////////////////////////////////////////////////////////////////////////////

pub const ICON_PACK_ASSETS: &[&str] = &[
    // Angular
    "folder-angular-components",
    "folder-angular-directives",
    "folder-angular-guards",
    "folder-angular-pipes",
    "folder-angular-services",
    "folder-angular-shared",
    "folder-angular-core",

    // React
    "folder-react-components",
    "folder-react-hooks",
    "folder-react-context",
    "folder-react-redux",

    // Vue / Vuex
    "folder-vue",
    "folder-vue-components",
    "folder-vue-directives",
    "folder-vue-views",
    "folder-vuex-store",

    // Nest
    "nest-controller",
    "nest-middleware",
    "nest-module",
    "nest-service",
    "nest-decorator",
    "nest-pipe",
    "nest-filter",
    "nest-gateway",
    "nest-guard",
    "nest-resolver",
];





////////////////////////////////////////////////////////////////////////////////
//
//  bundled_asset_names
//
//  Every icon asset shipped with the default tables, as "<id>.svg".
//  Deduplicated; order is not significant.
//
////////////////////////////////////////////////////////////////////////////////

pub fn bundled_asset_names() -> Vec<String> {
    let tables: [&[(&str, &str)]; 9] = [
        DEFAULT_FILE_NAME_ICONS,
        DEFAULT_FOLDER_NAME_ICONS,
        DEFAULT_EXTENSION_ICONS,
        DEFAULT_LANGUAGE_ID_ICONS,
        DEFAULT_FALLBACK_FILE_NAME_ICONS,
        DEFAULT_FALLBACK_EXTENSION_ICONS,
        DEFAULT_LIGHT_FILE_NAME_ICONS,
        DEFAULT_LIGHT_FOLDER_NAME_ICONS,
        DEFAULT_LIGHT_EXTENSION_ICONS,
    ];

    let fixed = [ICON_FILE, ICON_FOLDER, ICON_FOLDER_GIT, ICON_FOLDER_SYMLINK];

    let mut names: Vec<String> = tables.iter()
        .flat_map (|table| table.iter().map (|&(_, icon)| icon))
        .chain (fixed)
        .chain (ICON_PACK_ASSETS.iter().copied())
        .map (|icon| format!("{icon}{ICON_ASSET_SUFFIX}"))
        .collect();

    names.sort_unstable();
    names.dedup();
    names
}





////////////////////////////////////////////////////////////////////////////////
//
//  Unit Tests
//
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_no_duplicate_keys(table: &[(&str, &str)], label: &str) {
        let mut seen = HashSet::new();
        for &(key, _) in table {
            assert! (seen.insert (key), "Duplicate {} key: {}", label, key);
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  test_tables_have_no_duplicate_keys
    //
    //  A duplicate key would silently shadow an earlier entry.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn test_tables_have_no_duplicate_keys() {
        assert_no_duplicate_keys (DEFAULT_FILE_NAME_ICONS,          "file name");
        assert_no_duplicate_keys (DEFAULT_FOLDER_NAME_ICONS,        "folder name");
        assert_no_duplicate_keys (DEFAULT_EXTENSION_ICONS,          "extension");
        assert_no_duplicate_keys (DEFAULT_LANGUAGE_ID_ICONS,        "language id");
        assert_no_duplicate_keys (DEFAULT_FALLBACK_FILE_NAME_ICONS, "fallback file name");
        assert_no_duplicate_keys (DEFAULT_FALLBACK_EXTENSION_ICONS, "fallback extension");
        assert_no_duplicate_keys (DEFAULT_LIGHT_FILE_NAME_ICONS,    "light file name");
        assert_no_duplicate_keys (DEFAULT_LIGHT_FOLDER_NAME_ICONS,  "light folder name");
        assert_no_duplicate_keys (DEFAULT_LIGHT_EXTENSION_ICONS,    "light extension");
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  test_extension_keys_have_no_leading_dot
    //
    //  The extension parser strips the separating dot.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn test_extension_keys_have_no_leading_dot() {
        for &(key, _) in DEFAULT_EXTENSION_ICONS.iter().chain (DEFAULT_FALLBACK_EXTENSION_ICONS) {
            assert! (!key.starts_with ('.'), "Extension key must not start with '.': {}", key);
            assert! (!key.is_empty(), "Empty extension key");
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  test_folder_keys_are_lowercase
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn test_folder_keys_are_lowercase() {
        for &(key, _) in DEFAULT_FOLDER_NAME_ICONS {
            assert_eq! (key, key.to_lowercase(), "Key must be lowercase: {}", key);
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  test_light_icons_are_light_variants
    //
    //  Every light override points at a "_light" asset.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn test_light_icons_are_light_variants() {
        let light = DEFAULT_LIGHT_FILE_NAME_ICONS.iter()
            .chain (DEFAULT_LIGHT_FOLDER_NAME_ICONS)
            .chain (DEFAULT_LIGHT_EXTENSION_ICONS);

        for &(key, icon) in light {
            assert! (icon.ends_with ("_light"), "Light entry '{}' maps to non-light icon '{}'", key, icon);
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  test_bundled_asset_names
    //
    //  Fixed icons and pack assets are present, with the .svg suffix, once.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn test_bundled_asset_names() {
        let names = bundled_asset_names();
        let unique: HashSet<&String> = names.iter().collect();

        assert_eq! (unique.len(), names.len());
        assert! (names.iter().all (|n| n.ends_with (ICON_ASSET_SUFFIX)));

        for expected in ["file.svg", "folder.svg", "folder-git.svg", "folder-symlink.svg", "folder-react-components.svg", "toml_light.svg"] {
            assert! (names.iter().any (|n| n == expected), "missing asset {}", expected);
        }
    }
}

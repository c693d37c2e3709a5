use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use eggnog::{LevelCatalog, TaxonId, find_level_in};
use log::{info, warn};
use utils::now_str;

fn main() -> Result<()> {
    init_logging();
    let args = Cli::parse();

    info!("Reading levels from {}", args.levels_file.display());
    let catalog = LevelCatalog::load(&args.levels_file).context("Unable to read levels file")?;

    if args.check_sizes {
        for message in size_warnings(&catalog) {
            warn!("{}", message);
        }
    }

    let level = find_level_in(
        &catalog,
        args.query_org,
        args.search_level,
        args.search_orgs.as_deref(),
    )
    .context("Unable to find a level")?;

    println!("{}", result_line(&catalog, level, args.show_name)?);

    Ok(())
}

fn size_warnings(catalog: &LevelCatalog) -> Vec<String> {
    catalog
        .size_mismatches()
        .iter()
        .map(|m| {
            format!(
                "Level {} declares {} members but lists {}",
                m.id, m.declared, m.actual
            )
        })
        .collect()
}

/// The bare level id, or `id<TAB>name<TAB>size` when the name is requested
fn result_line(catalog: &LevelCatalog, level: TaxonId, show_name: bool) -> Result<String> {
    if !show_name {
        return Ok(level.to_string());
    }

    let found = catalog.get(level).context("Found level is missing from catalog")?;
    Ok(format!("{}\t{}\t{}", found.id, found.name, found.size))
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{}] {} {}", now_str(), record.level(), record.args()))
        .init();
}

#[derive(Parser, Debug)]
struct Cli {
    /// Path to the eggNOG levels file
    #[clap(long)]
    levels_file: PathBuf,

    /// Taxon id of the organism that must be part of the level
    #[clap(long)]
    query_org: TaxonId,

    /// Orthologous group whose members must be part of the level
    #[clap(long)]
    search_level: Option<TaxonId>,

    /// Comma separated taxon ids that must be part of the level
    #[clap(long, value_delimiter = ',')]
    search_orgs: Option<Vec<TaxonId>>,

    /// Print the level name and size next to its id
    #[clap(long)]
    show_name: bool,

    /// Warn about levels whose declared size differs from their member count
    #[clap(long)]
    check_sizes: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    const LEVELS: &str = "\
taxid\tcode\tname\tsize\tnogs\tproteins\tparent\tmembers
40674\tmaNOG\tMammals\t3\t\t\t\t9258 9606 61853
9443\tprNOG\tPrimates\t5\t\t\t\t9606 61853
";

    fn catalog() -> LevelCatalog {
        LevelCatalog::from_reader(LEVELS.as_bytes()).unwrap()
    }

    #[test]
    fn result_line_is_bare_id_by_default() {
        assert_eq!(result_line(&catalog(), 40674, false).unwrap(), "40674");
    }

    #[test]
    fn result_line_with_name_and_size() {
        assert_eq!(
            result_line(&catalog(), 40674, true).unwrap(),
            "40674\tMammals\t3"
        );
        assert!(result_line(&catalog(), 7227, true).is_err());
    }

    #[test]
    fn size_warnings_name_mismatched_levels() {
        assert_eq!(
            size_warnings(&catalog()),
            vec!["Level 9443 declares 5 members but lists 2".to_string()]
        );
    }

    #[test]
    fn cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_organism_list() {
        let args = Cli::try_parse_from([
            "find-level",
            "--levels-file",
            "levels.txt",
            "--query-org",
            "9606",
            "--search-orgs",
            "9258,61853",
        ])
        .unwrap();

        assert_eq!(args.query_org, 9606);
        assert_eq!(args.search_level, None);
        assert_eq!(args.search_orgs, Some(vec![9258, 61853]));
        assert!(!args.show_name);
    }

    #[test]
    fn search_options_are_not_checked_by_clap() {
        let args = Cli::try_parse_from([
            "find-level",
            "--levels-file",
            "levels.txt",
            "--query-org",
            "9606",
            "--search-level",
            "40674",
            "--search-orgs",
            "9258",
        ])
        .unwrap();

        assert_eq!(args.search_level, Some(40674));
        assert_eq!(args.search_orgs, Some(vec![9258]));
    }
}

use clap::Parser;
use gakureki_common::{rank, Catalog, Judge};
use gakureki_hantei::{catalog_loader, cli, config, error, interactive, report};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let mut config = Config::load()?;
    let catalog_arg = cli.catalog.as_deref();

    match cli.command {
        Commands::Judge { name, field, json, share } => {
            let catalog = open_catalog(&config, catalog_arg)?;
            let outcome = build_judge(&config, &catalog)?.judge(&name, field)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("{}", report::render_outcome(&outcome, share));
                println!("\n{}", gakureki_common::copy::DISCLAIMER);
            }
        }

        Commands::Interactive => {
            let catalog = open_catalog(&config, catalog_arg)?;
            interactive::run_interactive(&build_judge(&config, &catalog)?)?;
        }

        Commands::List { search, limit } => {
            let catalog = open_catalog(&config, catalog_arg)?;
            match search {
                Some(query) => {
                    let candidates = rank(&query, catalog.names(), limit);
                    println!("{}", report::render_candidates(&catalog, &candidates));
                }
                None => println!("{}", report::render_catalog(&catalog, limit)),
            }
        }

        Commands::Config { set_catalog, set_threshold, show } => {
            if let Some(path) = set_catalog {
                config.set_catalog_path(path)?;
                println!("✔ カタログを設定しました");
            }

            if let Some(threshold) = set_threshold {
                config.set_threshold(threshold)?;
                println!("✔ 閾値を設定しました");
            }

            if show {
                println!("設定:");
                println!("  カタログ: {}", config.resolve_catalog_path(catalog_arg).display());
                println!("  一致度の閾値: {}", config.match_threshold);
                println!("  国公立ボーナス: {:+}", config.public_bonus);
                println!("  理系ボーナス: {:+}", config.science_bonus);
                println!("  ハッシュタグ: {}", config.hashtags.join(" "));
            }
        }
    }

    Ok(())
}

/// カタログを読み込む（失敗時は判定を行わずに終了）
fn open_catalog(config: &Config, catalog_arg: Option<&Path>) -> Result<Catalog> {
    let path = config.resolve_catalog_path(catalog_arg);
    catalog_loader::load_catalog(&path).inspect_err(|_| {
        eprintln!("❌ {}", gakureki_common::copy::CATALOG_UNAVAILABLE);
    })
}

fn build_judge<'a>(config: &Config, catalog: &'a Catalog) -> Result<Judge<'a>> {
    Ok(Judge::new(catalog)
        .with_rules(config.score_rules()?)
        .with_threshold(config.match_threshold)
        .with_hashtags(config.hashtags.clone()))
}

/// `--verbose`でdebug、既定はwarn（RUST_LOGがあればそちらを優先）
fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

mod cli;
mod commands;

use cli::{EmitParams, ProbeParams, SymbolsParams, TypesParams, build_cli};

fn main() {
    env_logger::Builder::from_env("CPRELUDE_LOG")
        .format_timestamp(None)
        .init();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("emit", m)) => {
            let params = EmitParams::from_matches(m);
            commands::emit::run(params.into());
        }
        Some(("probe", m)) => {
            let params = ProbeParams::from_matches(m);
            commands::probe::run(params.into());
        }
        Some(("symbols", m)) => {
            let params = SymbolsParams::from_matches(m);
            commands::symbols::run(params.into());
        }
        Some(("types", m)) => {
            let params = TypesParams::from_matches(m);
            commands::types::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

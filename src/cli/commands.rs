//! CLI command implementations
//!
//! `serve` is strict: without its data it refuses to start, unless the
//! config opts into the sample fallback. The one-shot commands always
//! fall back to the sample dataset so they stay usable without data.

use serde_json::Value;

use crate::http_server::{ArchiveState, HttpServer};
use crate::loader::{load, load_or_sample, CsvFileSource, DataSource, SampleSource};
use crate::observability::{log_event, log_event_with_fields, log_query_complete, Event};
use crate::query::{QueryEngine, QueryError, QueryState, SortKey};
use crate::session::{Action, ViewState};

use super::args::{Cli, Command, SourceArgs};
use super::config::Config;
use super::errors::{CliError, CliErrorCode, CliResult};
use super::io::{error_envelope, ok_envelope, read_request, read_requests, write_error, write_json, write_response};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { source, port } => serve(&source, port),
        Command::Query { source } => query(&source),
        Command::Keywords { source } => keywords(&source),
        Command::Stats { source } => stats(&source),
        Command::Browse { source } => browse(&source),
    }
}

/// Resolves the config for `source`: file, then `PORT`, then `--data`
pub fn load_config(source: &SourceArgs) -> CliResult<Config> {
    let mut config = Config::resolve(source.config.as_deref())?;
    config.apply_env()?;
    if let Some(data) = &source.data {
        config.data_file = Some(data.display().to_string());
    }

    log_event_with_fields(
        Event::ConfigLoaded,
        &[("data_file", config.data_file.as_deref().unwrap_or("none"))],
    );
    Ok(config)
}

fn data_source(config: &Config) -> Box<dyn DataSource> {
    match config.data_path() {
        Some(path) => Box::new(CsvFileSource::new(path)),
        None => Box::new(SampleSource),
    }
}

/// Loads records for the one-shot commands, never failing
fn open_engine(config: &Config) -> QueryEngine {
    let outcome = load_or_sample(data_source(config).as_ref());
    QueryEngine::new(outcome.records)
}

/// Load the records and serve the HTTP API until ctrl-c
pub fn serve(source: &SourceArgs, port: Option<u16>) -> CliResult<()> {
    log_event(Event::StartupBegin);

    let mut config = load_config(source)?;
    if let Some(port) = port {
        config.port = port;
    }

    let records = if config.fallback_to_sample {
        load_or_sample(data_source(&config).as_ref()).records
    } else {
        let Some(path) = config.data_path() else {
            log_event_with_fields(Event::StartupFailed, &[("reason", "no data file configured")]);
            return Err(CliError::config_error(
                "No data file configured. Set data_file or pass --data.",
            ));
        };
        load(&CsvFileSource::new(path)).map_err(|e| {
            log_event_with_fields(Event::StartupFailed, &[("code", e.code().code())]);
            CliError::from(e)
        })?
    };

    let state = ArchiveState::new(QueryEngine::new(records)).with_page_size(config.page_size);
    let server = HttpServer::with_config(config.http_config(), state);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Run one query read from stdin and print the result page
///
/// The request is a `QueryState` object; omitted fields take defaults.
pub fn query(source: &SourceArgs) -> CliResult<()> {
    let config = load_config(source)?;
    let engine = open_engine(&config);

    let result = read_request().and_then(|request| run_query(&engine, request, config.page_size));
    match result {
        Ok(page) => write_response(page),
        Err(e) => {
            write_error(e.code_str(), e.message())?;
            Err(e)
        }
    }
}

/// Runs one stdin request against `engine`.
///
/// A request without `pageSize` uses `default_page_size`.
pub fn run_query(engine: &QueryEngine, mut request: Value, default_page_size: usize) -> CliResult<Value> {
    if let Some(obj) = request.as_object_mut() {
        obj.entry("pageSize").or_insert_with(|| Value::from(default_page_size));
    }
    check_sort_key(request.get("sortKey"))?;

    let state: QueryState = serde_json::from_value(request)
        .map_err(|e| CliError::invalid_request(format!("Invalid query: {}", e)))?;
    let page = engine.query(&state)?;
    log_query_complete("cli", page.total_matched, page.page, state.sort_key.as_str());
    Ok(serde_json::to_value(page)?)
}

/// Rejects an unknown sort key name under its engine error code, ahead of
/// the generic shape check
fn check_sort_key(value: Option<&Value>) -> Result<(), QueryError> {
    match value.and_then(Value::as_str) {
        Some(name) => name.parse::<SortKey>().map(|_| ()),
        None => Ok(()),
    }
}

/// Print the popular keywords
pub fn keywords(source: &SourceArgs) -> CliResult<()> {
    let config = load_config(source)?;
    let engine = open_engine(&config);
    write_response(Value::from(engine.popular_keywords()))
}

/// Print corpus statistics
pub fn stats(source: &SourceArgs) -> CliResult<()> {
    let config = load_config(source)?;
    let engine = open_engine(&config);
    write_response(serde_json::to_value(engine.stats())?)
}

/// Apply view actions from stdin, printing one rendered view per action
///
/// Bad requests are answered with an error line and skipped. Only an
/// unreadable stdin ends the session early.
pub fn browse(source: &SourceArgs) -> CliResult<()> {
    let config = load_config(source)?;
    let engine = open_engine(&config);
    let mut view = ViewState::new(config.page_size);

    for request in read_requests() {
        match request {
            Ok(request) => write_json(&browse_step(&mut view, &engine, request))?,
            Err(e) if e.code() == CliErrorCode::InvalidRequest => write_error(e.code_str(), e.message())?,
            Err(e) => {
                write_error(e.code_str(), e.message())?;
                return Err(e);
            }
        }
    }

    Ok(())
}

/// Applies one action request and returns the response envelope
pub fn browse_step(view: &mut ViewState, engine: &QueryEngine, request: Value) -> Value {
    if request.get("action").and_then(Value::as_str) == Some("sort") {
        if let Err(e) = check_sort_key(request.get("sort")) {
            return error_envelope(e.code().code(), e.message());
        }
    }

    let action: Action = match serde_json::from_value(request) {
        Ok(action) => action,
        Err(e) => {
            return error_envelope(
                CliErrorCode::InvalidRequest.code(),
                &format!("Invalid action: {}", e),
            )
        }
    };

    view.apply(action, engine);
    match view.render(engine) {
        Ok(rendered) => match serde_json::to_value(rendered) {
            Ok(data) => ok_envelope(data),
            Err(e) => error_envelope(CliErrorCode::IoError.code(), &e.to_string()),
        },
        Err(e) => error_envelope(e.code().code(), e.message()),
    }
}

use std::io::Write;
use std::process::ExitCode;
use clap::Parser;
use getprof::application::{parse_target, Config, ProfileAggregator, RequestExecutor};
use getprof::cli::{normalize_args, Cli};
use getprof::domain::GetprofError;
use getprof::infrastructure::{
    write_response, HickoryDnsResolver, Http10Client, JsonRenderer, TextRenderer, TokioClock, TokioTcpDialer,
    WriteAnnouncer,
};
use getprof::logger::init_logging;
use getprof::ports::Renderer;

fn main() -> ExitCode {
    let cli = match Cli::try_parse_from(normalize_args(std::env::args())) {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    init_logging(cli.verbose);
    let config = cli.config();

    // Requests never overlap, so one thread is enough.
    let rt = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error[ERROR]: failed to create runtime: {}", e);
            return ExitCode::from(1);
        }
    };

    match rt.block_on(run(&cli, config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(1)
        }
    }
}

async fn run(cli: &Cli, config: Config) -> Result<(), GetprofError> {
    let target = parse_target(&cli.url)?;
    let json_output = config.json_output;
    // JSON mode keeps stdout parseable.
    let announce_to: Box<dyn Write + Send> = if json_output {
        Box::new(std::io::stderr())
    } else {
        Box::new(std::io::stdout())
    };
    let executor = RequestExecutor::new(
        HickoryDnsResolver::new(),
        TokioTcpDialer::new(),
        Http10Client::new(),
        TokioClock::new(),
        WriteAnnouncer::new(announce_to),
        config,
    );

    match cli.profile_count() {
        None => {
            let response = executor.execute(&target).await?;
            write_response(&mut std::io::stdout().lock(), &response)
        }
        Some(count) => {
            let summary = ProfileAggregator::new(&executor).run(&target, count).await?;
            let report = if json_output {
                JsonRenderer::new().render(&summary)
            } else {
                TextRenderer::new().render(&summary)
            };
            print!("{}", report);
            Ok(())
        }
    }
}

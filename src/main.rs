use taskgrid::core::cli::CliPaths;
use taskgrid::core::context::AppContext;
use taskgrid::logging::LogTarget;
use taskgrid::prompter::flows::calendar_flow::CalendarFlow;
use taskgrid::prompter::prompter::Prompter;

fn main() {
    let paths = match CliPaths::from_env() {
        Ok(paths) => paths,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    let mut ctx =
        match AppContext::new_with_paths(paths.config_path, paths.tasks_path, paths.logs_dir) {
            Ok(ctx) => ctx,
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(1);
            }
        };
    ctx.logger.info("Session started", LogTarget::FileOnly);

    let flow = CalendarFlow::new(&mut ctx);
    match Prompter::new().run(flow) {
        Ok(summary) => ctx.logger.info(
            format!(
                "Session ended ({}) after {} command(s)",
                summary.end, summary.commands
            ),
            LogTarget::FileOnly,
        ),
        Err(err) => ctx.logger.error(format!("{err}"), LogTarget::ConsoleAndFile),
    }
}

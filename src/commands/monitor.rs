// Nagios-style one-shot checks of the videoconferencing backends.
// Verdict goes to stdout, the exit code carries the plugin state:
// 0 for OK, 2 (CRITICAL) for KO.

use crate::cli::CheckTarget;
use crate::config::VideoBackendConfig;
use crate::services::{MediasoupService, OpenViduService, SessionBackend, SessionReport};
use crate::utils::error::AppError;

const CRITICAL_EXIT_CODE: i32 = 2;

fn format_report(report: &SessionReport) -> String {
    match report.connections {
        Some(connections) => format!("OK | call={} connection={}", report.calls, connections),
        None => format!("OK | call={}", report.calls),
    }
}

pub async fn run(target: CheckTarget) -> Result<(), AppError> {
    let backend: Box<dyn SessionBackend> = match target {
        CheckTarget::Openvidu => Box::new(OpenViduService::new(
            VideoBackendConfig::openvidu_from_env().map_err(AppError::ConfigError)?,
        )),
        CheckTarget::Mediasoup => Box::new(MediasoupService::new(
            VideoBackendConfig::mediasoup_from_env().map_err(AppError::ConfigError)?,
        )),
    };

    match backend.fetch_sessions().await {
        Ok(report) => {
            println!("{}", format_report(&report));
            Ok(())
        }
        Err(e) => {
            log::error!("{} check failed: {}", backend.name(), e);
            println!("KO - Unable to get call");
            std::process::exit(CRITICAL_EXIT_CODE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_report_with_connections() {
        let report = SessionReport {
            calls: 3,
            connections: Some(6),
        };
        assert_eq!(format_report(&report), "OK | call=3 connection=6");
    }

    #[test]
    fn test_format_report_calls_only() {
        let report = SessionReport {
            calls: 12,
            connections: None,
        };
        assert_eq!(format_report(&report), "OK | call=12");
    }
}

use async_trait::async_trait;

use super::probe::{
    PROGRESS_DOWNLOAD, PROGRESS_DOWNLOAD_LATE, PROGRESS_LATENCY, PROGRESS_UPLOAD,
};
use super::{NetworkPhase, NetworkProbe, SpeedSampler};
use crate::{ReadyCheckError, Result, SpeedTestConfig};

/// Environment the speed test runs against: where its state lives, how it
/// reaches the network, and how it waits.
#[async_trait(?Send)]
pub trait NetworkHost {
    /// Apply `f` to the probe state. A host whose state has gone away returns
    /// `R::default()`, which winds the run down.
    fn update<R: Default>(&self, f: impl FnOnce(&mut NetworkProbe) -> R) -> R;

    /// Best-effort reachability check. Any failure, including the timeout, is `false`.
    async fn check_connectivity(&self, url: &str, timeout_ms: u32) -> bool;

    async fn sleep(&self, ms: u32) -> Result<()>;
}

/// Run the full connectivity → latency → download → upload sequence.
///
/// Returns `None` if a run was already in progress, otherwise the verdict.
pub async fn run_speed_test<H, S>(
    host: &H,
    sampler: &mut S,
    config: &SpeedTestConfig,
) -> Option<bool>
where
    H: NetworkHost,
    S: SpeedSampler,
{
    if !host.update(|p| p.start()) {
        tracing::debug!("Speed test already running");
        return None;
    }

    let reachable = host.update(|p| p.is_online())
        && host
            .check_connectivity(&config.probe_url, config.probe_timeout_ms)
            .await;
    if !reachable {
        host.update(|p| p.abort(&ReadyCheckError::Offline));
        return Some(false);
    }

    match measure(host, sampler, config).await {
        Ok(()) => host.update(|p| p.finish()).or(Some(false)),
        Err(e) => {
            host.update(|p| p.abort(&e));
            Some(false)
        }
    }
}

async fn measure<H, S>(host: &H, sampler: &mut S, config: &SpeedTestConfig) -> Result<()>
where
    H: NetworkHost,
    S: SpeedSampler,
{
    host.update(|p| p.enter(NetworkPhase::Latency, PROGRESS_LATENCY));
    host.sleep(config.latency_delay_ms).await?;
    let latency = sampler.latency_ms();
    host.update(|p| p.record_latency(latency));

    host.update(|p| p.enter(NetworkPhase::Download, PROGRESS_DOWNLOAD));
    let steps = config.download_delays_ms.len();
    for (i, delay) in config.download_delays_ms.iter().enumerate() {
        if i > 0 {
            let span = (PROGRESS_DOWNLOAD_LATE - PROGRESS_DOWNLOAD) as usize;
            let progress = PROGRESS_DOWNLOAD as usize + span * i / (steps - 1);
            host.update(|p| p.advance(progress as u8));
        }
        host.sleep(*delay).await?;
    }
    let download = sampler.download_mbps();
    host.update(|p| p.record_download(download));

    host.update(|p| p.enter(NetworkPhase::Upload, PROGRESS_UPLOAD));
    host.sleep(config.upload_delay_ms).await?;
    let upload = sampler.upload_mbps();
    host.update(|p| p.record_upload(upload));

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use super::*;

    struct Fixed {
        latency: u32,
        download: u32,
        upload: u32,
    }

    impl SpeedSampler for Fixed {
        fn latency_ms(&mut self) -> u32 {
            self.latency
        }
        fn download_mbps(&mut self) -> u32 {
            self.download
        }
        fn upload_mbps(&mut self) -> u32 {
            self.upload
        }
    }

    fn fixed(latency: u32, download: u32, upload: u32) -> Fixed {
        Fixed {
            latency,
            download,
            upload,
        }
    }

    #[derive(Default)]
    struct ScriptedHost {
        probe: RefCell<NetworkProbe>,
        reachable: bool,
        fail_sleep_at: Option<usize>,
        sleeps: RefCell<Vec<u32>>,
        progress_log: RefCell<Vec<u8>>,
        probes: RefCell<u32>,
    }

    impl ScriptedHost {
        fn reachable() -> Self {
            Self {
                reachable: true,
                ..Self::default()
            }
        }
    }

    #[async_trait(?Send)]
    impl NetworkHost for ScriptedHost {
        fn update<R: Default>(&self, f: impl FnOnce(&mut NetworkProbe) -> R) -> R {
            let mut probe = self.probe.borrow_mut();
            let out = f(&mut probe);
            self.progress_log.borrow_mut().push(probe.progress());
            out
        }

        async fn check_connectivity(&self, _url: &str, _timeout_ms: u32) -> bool {
            *self.probes.borrow_mut() += 1;
            self.reachable
        }

        async fn sleep(&self, ms: u32) -> Result<()> {
            let mut sleeps = self.sleeps.borrow_mut();
            if self.fail_sleep_at == Some(sleeps.len()) {
                return Err(ReadyCheckError::Browser("setTimeout unavailable".into()));
            }
            sleeps.push(ms);
            Ok(())
        }
    }

    #[test]
    fn test_good_connection_passes() {
        let host = ScriptedHost::reachable();
        let verdict = block_on(run_speed_test(
            &host,
            &mut fixed(30, 40, 10),
            &SpeedTestConfig::default(),
        ));
        assert_eq!(verdict, Some(true));

        let probe = host.probe.borrow();
        assert_eq!(probe.result.passed, Some(true));
        assert_eq!(probe.progress(), 100);
        assert_eq!(probe.phase(), NetworkPhase::Idle);
        assert!(!probe.is_running());
        assert_eq!(probe.measurements().latency_ms, Some(30));
        assert_eq!(probe.measurements().download_mbps, Some(40));
        assert_eq!(probe.measurements().upload_mbps, Some(10));
    }

    #[test]
    fn test_high_latency_fails() {
        let host = ScriptedHost::reachable();
        let verdict = block_on(run_speed_test(
            &host,
            &mut fixed(150, 40, 10),
            &SpeedTestConfig::default(),
        ));
        assert_eq!(verdict, Some(false));
        assert_eq!(host.probe.borrow().result.passed, Some(false));
        assert_eq!(host.probe.borrow().result.error, None);
    }

    #[test]
    fn test_phase_schedule_and_delays() {
        let host = ScriptedHost::reachable();
        block_on(run_speed_test(
            &host,
            &mut fixed(30, 40, 10),
            &SpeedTestConfig::default(),
        ));

        assert_eq!(*host.sleeps.borrow(), vec![1000, 1500, 1000, 1500]);

        let mut milestones = host.progress_log.borrow().clone();
        milestones.dedup();
        assert_eq!(milestones, vec![0, 10, 30, 60, 80, 100]);
    }

    #[test]
    fn test_unreachable_short_circuits() {
        let host = ScriptedHost::default();
        let verdict = block_on(run_speed_test(
            &host,
            &mut fixed(30, 40, 10),
            &SpeedTestConfig::default(),
        ));
        assert_eq!(verdict, Some(false));

        let probe = host.probe.borrow();
        assert_eq!(probe.progress(), 0);
        assert_eq!(
            probe.result.error.as_deref(),
            Some("No internet connection detected. Please check your network and try again.")
        );
        assert!(host.sleeps.borrow().is_empty());
        assert_eq!(*probe.measurements(), crate::NetworkResult::default());
    }

    #[test]
    fn test_offline_skips_network_probe() {
        let host = ScriptedHost::reachable();
        host.probe.borrow_mut().set_online(false);
        let verdict = block_on(run_speed_test(
            &host,
            &mut fixed(30, 40, 10),
            &SpeedTestConfig::default(),
        ));
        assert_eq!(verdict, Some(false));
        assert_eq!(*host.probes.borrow(), 0);
        assert_eq!(host.probe.borrow().progress(), 0);
    }

    #[test]
    fn test_run_while_running_is_noop() {
        let host = ScriptedHost::reachable();
        host.update(|p| {
            p.start();
            p.enter(NetworkPhase::Download, 30);
        });
        let before = host.probe.borrow().clone();

        let verdict = block_on(run_speed_test(
            &host,
            &mut fixed(30, 40, 10),
            &SpeedTestConfig::default(),
        ));
        assert_eq!(verdict, None);
        assert_eq!(*host.probe.borrow(), before);
        assert_eq!(*host.probes.borrow(), 0);
    }

    #[test]
    fn test_mid_run_failure_is_generic() {
        let host = ScriptedHost {
            fail_sleep_at: Some(2),
            ..ScriptedHost::reachable()
        };
        let verdict = block_on(run_speed_test(
            &host,
            &mut fixed(30, 40, 10),
            &SpeedTestConfig::default(),
        ));
        assert_eq!(verdict, Some(false));

        let probe = host.probe.borrow();
        assert_eq!(
            probe.result.error.as_deref(),
            Some("Speed test failed. Please try again.")
        );
        assert!(!probe.is_running());
        assert_eq!(probe.measurements().latency_ms, Some(30));
        assert_eq!(probe.measurements().download_mbps, None);
    }

    #[test]
    fn test_three_download_steps_stay_below_upload() {
        let host = ScriptedHost::reachable();
        let config = SpeedTestConfig {
            download_delays_ms: vec![10, 10, 10],
            ..SpeedTestConfig::default()
        };
        block_on(run_speed_test(&host, &mut fixed(30, 40, 10), &config));

        let mut milestones = host.progress_log.borrow().clone();
        milestones.dedup();
        assert_eq!(milestones, vec![0, 10, 30, 45, 60, 80, 100]);
    }
}

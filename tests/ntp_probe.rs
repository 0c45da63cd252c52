//! NTP probe behavior against loopback sockets

use clock_preflight::models::CheckOutcome;
use clock_preflight::probes::{NtpProbe, Probe};
use std::time::{Duration, Instant};
use tokio::net::UdpSocket;

#[tokio::test]
async fn ntp_probe_accepts_any_datagram() {
    let responder = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let addr = responder.local_addr().unwrap();

    // Reply with junk bytes; the probe is reachability-only and must not
    // care what comes back
    let server = tokio::spawn(async move {
        let mut buf = [0u8; 64];
        let (len, peer) = responder.recv_from(&mut buf).await.unwrap();
        assert_eq!(len, 48);
        assert_eq!(buf[0], 0x1B);
        assert!(buf[1..len].iter().all(|&b| b == 0));
        responder.send_to(b"junk", peer).await.unwrap();
    });

    let probe = NtpProbe::new(addr.to_string(), Duration::from_secs(3));
    let outcome = probe.run().await;
    assert!(
        matches!(outcome, CheckOutcome::Passed { .. }),
        "outcome: {:?}",
        outcome
    );
    server.await.unwrap();
}

#[tokio::test]
async fn ntp_probe_times_out_against_a_silent_server() {
    // Bound but never answered, so the probe has to hit its receive timeout
    let silent = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let addr = silent.local_addr().unwrap();

    let timeout = Duration::from_millis(300);
    let probe = NtpProbe::new(addr.to_string(), timeout);

    let started = Instant::now();
    let outcome = probe.run().await;
    let elapsed = started.elapsed();

    match outcome {
        CheckOutcome::Failed { reason } => {
            assert!(reason.contains("no response"), "reason: {}", reason)
        }
        other => panic!("expected failure, got {:?}", other),
    }
    assert!(elapsed >= timeout, "elapsed: {:?}", elapsed);
    assert!(
        elapsed < timeout + Duration::from_secs(2),
        "elapsed: {:?}",
        elapsed
    );
}

#[tokio::test]
async fn ntp_probe_reports_resolution_failures() {
    let probe = NtpProbe::new(
        "nonexistent.invalid",
        Duration::from_secs(1),
    );
    let outcome = probe.run().await;
    assert!(
        matches!(outcome, CheckOutcome::Failed { .. }),
        "outcome: {:?}",
        outcome
    );
}

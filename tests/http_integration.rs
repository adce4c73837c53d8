// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the device wire contract using wiremock.

use std::time::Duration;

use rgbled_lib::types::RgbColor;
use rgbled_lib::{DeviceClient, Endpoint, Error, Palette};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

async fn mount_ack(server: &MockServer, text: &str) {
    Mock::given(method("GET"))
        .and(path("/ack"))
        .respond_with(ResponseTemplate::new(200).set_body_string(text))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_no_ack(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/ack"))
        .respond_with(ResponseTemplate::new(200).set_body_string("unexpected"))
        .expect(0)
        .mount(server)
        .await;
}

fn client_for(server: &MockServer) -> DeviceClient {
    DeviceClient::new(server.uri()).unwrap()
}

// ============================================================================
// Commands
// ============================================================================

mod commands {
    use super::*;

    #[tokio::test]
    async fn turn_on_known_color_sends_rgb_then_reads_ack() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/set_color"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"color": "rojo", "rgb": [255, 0, 0]})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        mount_ack(&server, "OK: rojo (255,0,0)\n").await;

        let ack = client_for(&server).turn_on_color("ROJO").await.unwrap();
        assert_eq!(ack, "OK: rojo (255,0,0)");
    }

    #[tokio::test]
    async fn turn_on_unknown_color_is_still_sent() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/set_color"))
            .and(body_json(json!({"color": "notacolor"})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        mount_ack(&server, "OK: notacolor").await;

        let ack = client_for(&server)
            .turn_on_color("  NotAColor ")
            .await
            .unwrap();
        assert_eq!(ack, "OK: notacolor");
    }

    #[tokio::test]
    async fn turn_on_color_uses_custom_palette() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/set_color"))
            .and(body_json(json!({"color": "warm", "rgb": [255, 180, 100]})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        mount_ack(&server, "OK: warm (255,180,100)").await;

        let client = DeviceClient::builder(server.uri())
            .with_palette(Palette::new([("Warm", RgbColor::new(255, 180, 100))]))
            .build()
            .unwrap();

        client.turn_on_color("warm").await.unwrap();
    }

    #[tokio::test]
    async fn set_rgb_sends_triple_without_name() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/set_color"))
            .and(body_json(json!({"rgb": [10, 20, 30]})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        mount_ack(&server, "OK: (10,20,30)").await;

        let ack = client_for(&server).set_rgb(10, 20, 30).await.unwrap();
        assert_eq!(ack, "OK: (10,20,30)");
    }

    #[tokio::test]
    async fn turn_off_posts_without_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/off"))
            .and(|req: &Request| req.body.is_empty())
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        mount_ack(&server, "OK: off").await;

        let ack = client_for(&server).turn_off().await.unwrap();
        assert_eq!(ack, "OK: off");
    }
}

// ============================================================================
// Queries
// ============================================================================

mod queries {
    use super::*;

    #[tokio::test]
    async fn fetch_ack_returns_plain_text() {
        let server = MockServer::start().await;
        mount_ack(&server, "OK: azul (0,0,255)").await;

        let ack = client_for(&server).fetch_ack().await.unwrap();
        assert_eq!(ack, "OK: azul (0,0,255)");
    }

    #[tokio::test]
    async fn fetch_status_decodes_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "ok",
                "color": "azul",
                "rgb": [0, 0, 255]
            })))
            .mount(&server)
            .await;

        let status = client_for(&server).fetch_status().await.unwrap();
        assert_eq!(status.color(), Some("azul"));
        assert_eq!(status.rgb(), Some(RgbColor::new(0, 0, 255)));
        assert_eq!(status.raw()["status"], "ok");
    }

    #[tokio::test]
    async fn fetch_status_invalid_json_is_protocol_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/status"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_status().await.unwrap_err();
        assert!(matches!(
            err,
            Error::Protocol {
                endpoint: Endpoint::Status,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn fetch_status_wrong_shape_is_protocol_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/status"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"status": "ok", "rgb": [0, 0, 999]})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_status().await.unwrap_err();
        assert!(matches!(err, Error::Protocol { .. }));
    }

    #[tokio::test]
    async fn fetch_status_non_ok_flag_is_rejection() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "error"})))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_status().await.unwrap_err();
        assert!(matches!(
            err,
            Error::DeviceRejected {
                endpoint: Endpoint::Status,
                status: 200,
                ..
            }
        ));
    }
}

// ============================================================================
// Destination
// ============================================================================

mod destination {
    use super::*;

    #[tokio::test]
    async fn second_destination_receives_next_request() {
        let first = MockServer::start().await;
        let second = MockServer::start().await;
        let third = MockServer::start().await;

        for (server, hits) in [(&first, 0u64), (&second, 0), (&third, 1)] {
            Mock::given(method("GET"))
                .and(path("/ack"))
                .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
                .expect(hits)
                .mount(server)
                .await;
        }

        let client = client_for(&first);
        client.set_destination(&second.uri()).unwrap();
        client.set_destination(&format!("{}/", third.uri())).unwrap();

        assert_eq!(client.destination().as_str(), third.uri());
        client.fetch_ack().await.unwrap();
    }

    #[tokio::test]
    async fn destination_without_scheme_reaches_device() {
        let server = MockServer::start().await;
        mount_ack(&server, "OK").await;

        let host = server.uri().replace("http://", "");
        let client = DeviceClient::new(host).unwrap();

        assert_eq!(client.fetch_ack().await.unwrap(), "OK");
    }
}

// ============================================================================
// Error Handling Tests
// ============================================================================

mod error_handling {
    use super::*;

    #[tokio::test]
    async fn rejected_command_skips_ack() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;
        mount_no_ack(&server).await;

        let client = client_for(&server);

        let err = client.turn_on_color("verde").await.unwrap_err();
        match err {
            Error::DeviceRejected {
                endpoint,
                status,
                reason,
            } => {
                assert_eq!(endpoint, Endpoint::SetColor);
                assert_eq!(status, 500);
                assert_eq!(reason, "HTTP 500 - Internal Server Error: boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        assert!(matches!(
            client.set_rgb(1, 2, 3).await,
            Err(Error::DeviceRejected { status: 500, .. })
        ));
        assert!(matches!(
            client.turn_off().await,
            Err(Error::DeviceRejected {
                endpoint: Endpoint::Off,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn rejected_ack_fails_command() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/off"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/ack"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client_for(&server).turn_off().await.unwrap_err();
        assert!(matches!(
            err,
            Error::DeviceRejected {
                endpoint: Endpoint::Ack,
                status: 404,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn rejected_queries() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert!(matches!(
            client.fetch_ack().await,
            Err(Error::DeviceRejected { status: 503, .. })
        ));
        assert!(matches!(
            client.fetch_status().await,
            Err(Error::DeviceRejected { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn handles_connection_refused() {
        // Use a port that's definitely not listening
        let client = DeviceClient::new("127.0.0.1:59999").unwrap();

        let err = client.turn_off().await.unwrap_err();
        assert!(matches!(
            err,
            Error::Transport {
                endpoint: Endpoint::Off,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn every_operation_reports_connection_refused() {
        let client = DeviceClient::new("127.0.0.1:59999").unwrap();

        let err = client.turn_on_color("azul").await.unwrap_err();
        assert!(matches!(
            err,
            Error::Transport {
                endpoint: Endpoint::SetColor,
                ..
            }
        ));

        let err = client.set_rgb(1, 2, 3).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Transport {
                endpoint: Endpoint::SetColor,
                ..
            }
        ));

        let err = client.fetch_ack().await.unwrap_err();
        assert!(matches!(
            err,
            Error::Transport {
                endpoint: Endpoint::Ack,
                ..
            }
        ));

        let err = client.fetch_status().await.unwrap_err();
        assert!(matches!(
            err,
            Error::Transport {
                endpoint: Endpoint::Status,
                ..
            }
        ));
        assert!(!err.is_timeout());
    }

    #[tokio::test]
    async fn slow_device_times_out() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/status"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"status": "ok"}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let client = DeviceClient::builder(server.uri())
            .with_timeout(Duration::from_millis(100))
            .build()
            .unwrap();

        let err = client.fetch_status().await.unwrap_err();
        assert!(err.is_timeout(), "expected timeout, got {err:?}");
        assert_eq!(err.endpoint(), Some(Endpoint::Status));
    }
}

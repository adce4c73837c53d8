// SPDX-License-Identifier: MPL-2.0

//! Command-line control of the LED device.
//!
//! The destination comes from `ESP32_URL` (default `http://192.168.10.2:80`).
//! Set `RUST_LOG=rgbled_lib=debug` to see each HTTP exchange.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example led_control -- colors
//! cargo run --example led_control -- color rojo
//! cargo run --example led_control -- rgb 255 128 0
//! cargo run --example led_control -- off
//! cargo run --example led_control -- ack
//! cargo run --example led_control -- status
//! ```

use std::env;

use rgbled_lib::DeviceClient;
use rgbled_lib::types::RgbColor;
use tracing_subscriber::EnvFilter;

fn usage(program: &str) -> ! {
    eprintln!("Usage: {program} <colors | color <name> | rgb <r> <g> <b> | off | ack | status>");
    eprintln!();
    eprintln!("Example:");
    eprintln!("  ESP32_URL=192.168.10.2 cargo run --example led_control -- color azul");
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("led_control", String::as_str);
    let rest: Vec<&str> = args.iter().skip(1).map(String::as_str).collect();

    let client = DeviceClient::from_env()?;
    println!("Destination: {}", client.destination());

    let result = match rest.as_slice() {
        ["colors"] => {
            for (name, rgb) in client.palette().iter() {
                println!("{:<10} {rgb} {}", name.capitalized(), rgb.to_hex_with_hash());
            }
            return Ok(());
        }
        ["color", name] => client.turn_on_color(name).await,
        ["rgb", r, g, b] => {
            let color = RgbColor::from_components(r.parse()?, g.parse()?, b.parse()?)?;
            client.set_rgb_color(color).await
        }
        ["off"] => client.turn_off().await,
        ["ack"] => client.fetch_ack().await,
        ["status"] => client.fetch_status().await.map(|status| status.to_string()),
        _ => usage(program),
    };

    match result {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    }

    Ok(())
}

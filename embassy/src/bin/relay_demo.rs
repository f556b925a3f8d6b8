//! Exercises both relay boards in an endless cycle and reports every step
//! over defmt and the USART3 virtual COM port.
//!
//! This runs on a NUCLEO-F767ZI, see `nucleo_f767zi::board` for the wiring.

#![no_std]
#![no_main]

use core::fmt::Write;

use defmt::info;
use embassy_executor::Spawner;
use embassy_stm32::usart::{Config, UartTx};
use embassy_time::{Duration, Timer};
use heapless::String;
use {defmt_rtt as _, panic_probe as _};

use dual_relay::{Channel, DualRelay, Module};
use nucleo_f767zi::setup_relay_pins;

// log over defmt and write the same line to the serial console
macro_rules! status {
    ($usart:ident, $($arg:tt)*) => {{
        info!($($arg)*);
        let mut msg: String<64> = String::new();
        core::write!(&mut msg, $($arg)*).unwrap();
        msg.push_str("\r\n").unwrap();
        $usart.write(msg.as_bytes()).await.unwrap();
    }};
}

async fn pause(ms: u64) {
    Timer::after(Duration::from_millis(ms)).await;
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_stm32::init(Default::default());

    let mut usart = UartTx::new(p.USART3, p.PD8, p.DMA1_CH4, Config::default()).unwrap();

    let mut relays = DualRelay::new(setup_relay_pins!(p)).unwrap();
    status!(usart, "Dual 4-channel relay modules initialized");

    loop {
        status!(usart, "Cycling through all 8 relays individually");
        for ch in Channel::ALL {
            status!(usart, "Turning ON relay {}", ch.number());
            relays.set_channel(ch, true).unwrap();
            pause(1000).await;

            status!(usart, "Turning OFF relay {}", ch.number());
            relays.set_channel(ch, false).unwrap();
            pause(1000).await;
        }

        status!(usart, "Turning all relays ON");
        relays.set_all(true).unwrap();
        pause(2000).await;

        status!(usart, "Turning all relays OFF");
        relays.set_all(false).unwrap();
        pause(2000).await;

        status!(usart, "Setting alternating pattern (10101010)");
        relays.set_pattern(0xAA).unwrap();
        pause(2000).await;

        status!(usart, "Setting inverse pattern (01010101)");
        relays.set_pattern(0x55).unwrap();
        pause(2000).await;

        status!(usart, "Module A ON, module B OFF");
        relays.set_module(Module::A, 0x0F).unwrap();
        relays.set_module(Module::B, 0x00).unwrap();
        pause(2000).await;

        status!(usart, "Module A OFF, module B ON");
        relays.set_module(Module::A, 0x00).unwrap();
        relays.set_module(Module::B, 0x0F).unwrap();
        pause(2000).await;

        relays.set_all(false).unwrap();
        pause(1000).await;
    }
}

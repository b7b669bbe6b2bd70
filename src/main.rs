#![no_std]
#![no_main]

use cyw43::Control;
use cyw43_pio::{PioSpi, RM2_CLOCK_DIVIDER};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::clocks::RoscRng;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::{DMA_CH0, PIO0};
use embassy_rp::pio::{InterruptHandler, Pio};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_time::{Duration, Timer};
use panic_persist as _;
use static_cell::StaticCell;

// Network stack imports
use embassy_net::udp::PacketMetadata;
use embassy_net::{Config, StackResources};

use wol_pico::net::embassy_adapter::EmbassyUdpTransport;
use wol_pico::net::subnet_broadcast;
use wol_pico::net::transport::AsyncTransport;
use wol_pico::protocol::constants::{DEFAULT_WOL_PORT, MAX_DATAGRAM_SIZE};
use wol_pico::{utility, wol_log, IpEndpoint, Ipv4Addr, WakeCommand, WolClient};

#[cfg(feature = "usb-logger")]
use embassy_rp::peripherals::USB;
#[cfg(feature = "usb-logger")]
use embassy_rp::usb::{Driver, InterruptHandler as UsbInterruptHandler};

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"WOL-PICO"),
    embassy_rp::binary_info::rp_program_description!(
        c"Wake-on-LAN sender for Raspberry Pico 2 W"
    ),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

// Interrupt handlers
bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => InterruptHandler<PIO0>;
});

#[cfg(feature = "usb-logger")]
bind_interrupts!(struct UsbIrqs {
    USBCTRL_IRQ => UsbInterruptHandler<USB>;
});

/// WiFi controller handle shared between embassy tasks
#[derive(Clone, Copy)]
pub struct SharedControl(&'static Mutex<CriticalSectionRawMutex, Control<'static>>);

/// Entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    // Start the logger on USB when configured
    #[cfg(feature = "usb-logger")]
    {
        let driver = Driver::new(p.USB, UsbIrqs);
        spawner.must_spawn(logger_task(driver));
    }

    if let Some(panic_message) = panic_persist::get_panic_message_utf8() {
        wol_log!(error, "{}", panic_message);
        loop {
            Timer::after_secs(5).await;
        }
    }

    // Firmware files for the CYW43xxx WiFi chip
    let fw = include_bytes!("../cyw43-firmware/43439A0.bin");
    let clm = include_bytes!("../cyw43-firmware/43439A0_clm.bin");

    let pwr = Output::new(p.PIN_23, Level::Low);
    let cs = Output::new(p.PIN_25, Level::High);
    let mut pio = Pio::new(p.PIO0, Irqs);
    let spi = PioSpi::new(
        &mut pio.common,
        pio.sm0,
        RM2_CLOCK_DIVIDER,
        pio.irq0,
        cs,
        p.PIN_24,
        p.PIN_29,
        p.DMA_CH0,
    );

    static STATE: StaticCell<cyw43::State> = StaticCell::new();
    let state = STATE.init(cyw43::State::new());
    let (net_device, mut control, runner) = cyw43::new(state, pwr, spi, fw).await;

    spawner.must_spawn(cyw43_task(runner));

    control.init(clm).await;
    control
        .set_power_management(cyw43::PowerManagementMode::PowerSave)
        .await;

    // Configure network stack with DHCP
    let config = Config::dhcpv4(Default::default());

    // Generate random seed for network stack
    let seed: u64 = RoscRng.next_u64();
    wol_log!(info, "Random seed: {}", seed);

    // Initialize network stack
    static RESOURCES: StaticCell<StackResources<3>> = StaticCell::new();
    let (stack, runner) = embassy_net::new(
        net_device,
        config,
        RESOURCES.init(StackResources::new()),
        seed,
    );

    spawner.must_spawn(net_task(runner));

    let shared_control = SharedControl(&*{
        static CONTROL: StaticCell<Mutex<CriticalSectionRawMutex, Control<'static>>> =
            StaticCell::new();
        CONTROL.init(Mutex::new(control))
    });

    spawner.must_spawn(blink_task(shared_control));

    // WiFi connection configuration
    // Either edit src/configuration.rs or set these via environment
    // variables at build time:
    // WIFI_SSID=YourNetwork WIFI_PASSWORD=YourPassword cargo build ...
    let wifi_ssid = option_env!("WIFI_SSID").unwrap_or_else(utility::get_ssid);
    let wifi_password = option_env!("WIFI_PASSWORD").unwrap_or_else(utility::get_wifi_password);

    wol_log!(info, "Connecting to WiFi network: {}", wifi_ssid);

    // Join WiFi network
    loop {
        {
            let mut control = shared_control.0.lock().await;
            match control
                .join(wifi_ssid, cyw43::JoinOptions::new(wifi_password.as_bytes()))
                .await
            {
                Ok(()) => {
                    wol_log!(info, "WiFi connected successfully!");
                    break;
                }
                Err(e) => {
                    wol_log!(
                        error,
                        "WiFi connection failed: status={}, retrying in 5s...",
                        e.status
                    );
                }
            }
        }
        Timer::after(Duration::from_secs(5)).await;
    }

    // Wait for DHCP to assign IP address
    wol_log!(info, "Waiting for DHCP...");
    while !stack.is_config_up() {
        Timer::after_millis(100).await;
    }

    // Derive the wake destination from the DHCP configuration
    let mut destination = IpEndpoint::new(Ipv4Addr::BROADCAST, DEFAULT_WOL_PORT);
    if let Some(config) = stack.config_v4() {
        wol_log!(info, "IP Address: {}", config.address);
        let broadcast = subnet_broadcast(
            config.address.address().octets(),
            config.address.prefix_len(),
        );
        destination = IpEndpoint::new(broadcast, DEFAULT_WOL_PORT);
    }

    wol_log!(info, "Network ready, wake destination: {}", destination);

    // Wake socket
    let mut rx_meta = [PacketMetadata::EMPTY; 4];
    let mut tx_meta = [PacketMetadata::EMPTY; 4];
    let mut rx_buffer = [0u8; MAX_DATAGRAM_SIZE];
    let mut tx_buffer = [0u8; MAX_DATAGRAM_SIZE];
    let mut transport = EmbassyUdpTransport::new(
        stack,
        &mut rx_meta,
        &mut rx_buffer,
        &mut tx_meta,
        &mut tx_buffer,
    );

    let wake_port = utility::get_wake_port();
    while transport.bind(wake_port).is_err() {
        wol_log!(error, "Failed to bind wake relay port {}, retrying in 5s...", wake_port);
        Timer::after(Duration::from_secs(5)).await;
    }

    let mut client = WolClient::with_destination(transport, destination);

    // Wake the configured default target once at startup
    match utility::target_mac() {
        Ok(target) => {
            wol_log!(info, "Waking default target {}", target);
            if client.wake(target).await.is_err() {
                wol_log!(error, "Initial wake burst failed");
            }
        }
        Err(_) => {
            wol_log!(warn, "No valid TARGET_MAC configured, skipping initial wake");
        }
    }

    wol_log!(info, "Wake relay listening on port {}", wake_port);

    // Relay loop: any datagram carrying a MAC becomes a magic packet
    // broadcast on the local subnet
    let mut datagram = [0u8; MAX_DATAGRAM_SIZE];
    loop {
        match client.transport_mut().recv_from(&mut datagram).await {
            Ok((n, from)) => match WakeCommand::parse(&datagram[..n]) {
                Ok(command) => {
                    wol_log!(info, "Wake request from {} for {}", from, command.mac());
                    let sent = match command.password() {
                        Some(password) => {
                            client.wake_with_password(command.mac(), password).await
                        }
                        None => client.wake(command.mac()).await,
                    };
                    match sent {
                        Ok(()) => wol_log!(info, "Magic packet burst sent"),
                        Err(_) => wol_log!(error, "Failed to send magic packet burst"),
                    }
                }
                Err(_) => {
                    wol_log!(warn, "Ignoring unrecognized datagram ({} bytes)", n);
                }
            },
            Err(_) => {
                Timer::after_millis(100).await;
            }
        }
    }
}

#[embassy_executor::task]
async fn cyw43_task(
    runner: cyw43::Runner<'static, Output<'static>, PioSpi<'static, PIO0, 0, DMA_CH0>>,
) -> ! {
    runner.run().await
}

#[embassy_executor::task]
async fn net_task(mut runner: embassy_net::Runner<'static, cyw43::NetDriver<'static>>) -> ! {
    runner.run().await
}

#[cfg(feature = "usb-logger")]
#[embassy_executor::task]
async fn logger_task(driver: Driver<'static, USB>) {
    embassy_usb_logger::run!(1024, log::LevelFilter::Info, driver);
}

#[embassy_executor::task]
async fn blink_task(shared_control: SharedControl) {
    let delay = Duration::from_millis(500);
    loop {
        shared_control.0.lock().await.gpio_set(0, true).await;
        Timer::after(delay).await;
        shared_control.0.lock().await.gpio_set(0, false).await;
        Timer::after(delay).await;
    }
}

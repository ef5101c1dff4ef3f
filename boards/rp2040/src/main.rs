#![no_main]
#![no_std]

use defmt::*;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::{
    adc::{self, Adc, Channel},
    bind_interrupts,
    gpio::{Input, Level, Output, Pull},
    i2c::{self, I2c},
    pwm::{self, Pwm},
};
use joypanel::{
    PanelConfig, PanelContext, ToggleController,
    driver::{
        SharedLedPwm,
        adc::RpJoystickAdc,
        pwm::RpLedPwm,
    },
    run_panel,
};
use panic_probe as _;
use ssd1306::{I2CDisplayInterface, Ssd1306, prelude::*};
use static_cell::StaticCell;

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => adc::InterruptHandler;
});

/// OLED bus clock
const I2C_FREQUENCY: u32 = 400_000;

type LedPwmHandle = &'static SharedLedPwm<RpLedPwm<'static>>;

static CONTEXT: StaticCell<PanelContext> = StaticCell::new();
static LED_PWM: StaticCell<SharedLedPwm<RpLedPwm<'static>>> = StaticCell::new();

#[embassy_executor::task]
async fn input_task(
    mut controller: ToggleController<'static, LedPwmHandle, Output<'static>>,
    mut button_a: Input<'static>,
    mut button_b: Input<'static>,
    mut joystick_button: Input<'static>,
) {
    controller
        .run(&mut button_a, &mut button_b, &mut joystick_button)
        .await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Joypanel start!");
    // Initialize peripherals
    let p = embassy_rp::init(Default::default());
    let config = PanelConfig::default();

    let context: &'static PanelContext = CONTEXT.init(PanelContext::new(&config.toggles));

    // Blue LED on GPIO12 (PWM6 A), red LED on GPIO13 (PWM6 B)
    let pwm = Pwm::new_output_ab(p.PWM_SLICE6, p.PIN_12, p.PIN_13, pwm::Config::default());
    let led_pwm: LedPwmHandle = LED_PWM.init(SharedLedPwm::new(RpLedPwm::new(
        pwm,
        &config.pwm,
        true,
        config.toggles.pwm_enabled,
    )));

    // Buttons pull the pins low when pressed
    let button_a = Input::new(p.PIN_5, Pull::Up);
    let button_b = Input::new(p.PIN_6, Pull::Up);
    let joystick_button = Input::new(p.PIN_22, Pull::Up);
    let green_led = Output::new(p.PIN_11, Level::Low);

    let controller = ToggleController::new(context, led_pwm, green_led, &config);
    spawner.spawn(unwrap!(input_task(controller, button_a, button_b, joystick_button)));

    // SSD1306 128x64 on I2C1, address 0x3C
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = I2C_FREQUENCY;
    let i2c = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c_config);
    let mut display = Ssd1306::new(
        I2CDisplayInterface::new(i2c),
        DisplaySize128x64,
        DisplayRotation::Rotate0,
    )
    .into_buffered_graphics_mode();
    unwrap!(display.init());

    // Joystick X on ADC1 (GPIO27), Y on ADC0 (GPIO26)
    let adc = Adc::new(p.ADC, Irqs, adc::Config::default());
    let x = Channel::new_pin(p.PIN_27, Pull::None);
    let y = Channel::new_pin(p.PIN_26, Pull::None);
    let joystick = RpJoystickAdc::new(adc, x, y);

    // Start the panel, only returns if calibration failed
    let never = unwrap!(run_panel(joystick, led_pwm, display, context, config).await);
    match never {}
}

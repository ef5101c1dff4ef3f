/// Reset the device into its USB mass-storage bootloader. Never returns.
///
/// Without the `rp2040` feature there is no bootloader to enter and the device
/// is plainly reset.
pub fn jump_to_bootloader() -> ! {
    #[cfg(feature = "rp2040")]
    {
        warn!("Rebooting into the USB bootloader");
        embassy_rp::rom_data::reset_to_usb_boot(0, 0);
    }

    #[cfg(not(feature = "rp2040"))]
    warn!("No USB bootloader available, resetting");

    system_reset()
}

/// Fallback if the ROM call returns, or the only path off RP2040
fn system_reset() -> ! {
    #[cfg(all(target_arch = "arm", target_os = "none"))]
    cortex_m::peripheral::SCB::sys_reset();

    #[allow(unreachable_code)]
    loop {
        core::hint::spin_loop();
    }
}

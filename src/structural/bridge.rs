//! Bridge: remotes (the abstraction) and devices (the implementation) vary
//! independently. Any remote drives any device through the `Device` trait.

use std::io::Write;

use crate::catalog::{Category, Participant, Pattern};
use crate::error::PatternError;
use crate::output;

pub const MAX_VOLUME: u8 = 100;

pub trait Device {
    fn name(&self) -> &'static str;
    fn is_enabled(&self) -> bool;
    fn enable(&mut self);
    fn disable(&mut self);
    fn volume(&self) -> u8;
    fn set_volume(&mut self, volume: u8);
    fn channel(&self) -> u16;
    fn set_channel(&mut self, channel: u16);

    fn status(&self) -> String {
        format!(
            "{} is {}, volume {}, channel {}",
            self.name(),
            if self.is_enabled() { "on" } else { "off" },
            self.volume(),
            self.channel()
        )
    }
}

#[derive(Debug, Default)]
struct DeviceState {
    on: bool,
    volume: u8,
    channel: u16,
}

impl DeviceState {
    fn with_volume(volume: u8) -> Self {
        DeviceState {
            on: false,
            volume,
            channel: 1,
        }
    }
}

macro_rules! impl_device {
    ($ty:ident, $name:literal) => {
        impl Device for $ty {
            fn name(&self) -> &'static str {
                $name
            }

            fn is_enabled(&self) -> bool {
                self.state.on
            }

            fn enable(&mut self) {
                self.state.on = true;
            }

            fn disable(&mut self) {
                self.state.on = false;
            }

            fn volume(&self) -> u8 {
                self.state.volume
            }

            fn set_volume(&mut self, volume: u8) {
                self.state.volume = volume.min(MAX_VOLUME);
            }

            fn channel(&self) -> u16 {
                self.state.channel
            }

            fn set_channel(&mut self, channel: u16) {
                self.state.channel = channel;
            }
        }
    };
}

#[derive(Debug)]
pub struct Tv {
    state: DeviceState,
}

impl Tv {
    pub fn new() -> Self {
        Tv {
            state: DeviceState::with_volume(30),
        }
    }
}

impl Default for Tv {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct Radio {
    state: DeviceState,
}

impl Radio {
    pub fn new() -> Self {
        Radio {
            state: DeviceState::with_volume(10),
        }
    }
}

impl Default for Radio {
    fn default() -> Self {
        Self::new()
    }
}

impl_device!(Tv, "TV");
impl_device!(Radio, "Radio");

/// The abstraction side of the bridge.
pub struct Remote<D: Device> {
    device: D,
}

impl<D: Device> Remote<D> {
    pub fn new(device: D) -> Self {
        Remote { device }
    }

    pub fn toggle_power(&mut self) {
        if self.device.is_enabled() {
            self.device.disable();
        } else {
            self.device.enable();
        }
    }

    pub fn volume_up(&mut self) {
        let volume = self.device.volume().saturating_add(10);
        self.device.set_volume(volume);
    }

    pub fn volume_down(&mut self) {
        let volume = self.device.volume().saturating_sub(10);
        self.device.set_volume(volume);
    }

    pub fn channel_up(&mut self) {
        let channel = self.device.channel().wrapping_add(1);
        self.device.set_channel(channel);
    }

    pub fn device(&self) -> &D {
        &self.device
    }
}

/// Refined abstraction: everything `Remote` does, plus mute.
pub struct AdvancedRemote<D: Device> {
    remote: Remote<D>,
}

impl<D: Device> AdvancedRemote<D> {
    pub fn new(device: D) -> Self {
        AdvancedRemote {
            remote: Remote::new(device),
        }
    }

    pub fn mute(&mut self) {
        self.remote.device.set_volume(0);
    }

    pub fn remote(&mut self) -> &mut Remote<D> {
        &mut self.remote
    }

    pub fn device(&self) -> &D {
        self.remote.device()
    }
}

pub struct BridgePattern;

impl Pattern for BridgePattern {
    fn name(&self) -> &'static str {
        "bridge"
    }

    fn category(&self) -> Category {
        Category::Structural
    }

    fn intent(&self) -> &'static str {
        "Decouple an abstraction from its implementation so the two can vary independently."
    }

    fn participants(&self) -> &'static [Participant] {
        const PARTICIPANTS: &[Participant] = &[
            Participant::new("Abstraction", "Remote"),
            Participant::new("RefinedAbstraction", "AdvancedRemote"),
            Participant::new("Implementor", "Device"),
            Participant::new("ConcreteImplementor", "Tv, Radio"),
        ];
        PARTICIPANTS
    }

    fn run(&self, out: &mut dyn Write) -> Result<(), PatternError> {
        output::heading(out, "Bridge")?;

        output::section(out, "Basic remote + TV")?;
        let mut remote = Remote::new(Tv::new());
        remote.toggle_power();
        remote.volume_up();
        remote.channel_up();
        writeln!(out, "{}", remote.device().status())?;

        output::section(out, "Advanced remote + Radio")?;
        let mut advanced = AdvancedRemote::new(Radio::new());
        advanced.remote().toggle_power();
        advanced.remote().volume_up();
        writeln!(out, "{}", advanced.device().status())?;
        advanced.mute();
        writeln!(out, "{}", advanced.device().status())?;
        Ok(())
    }
}

// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Mock HAL shared by the integration tests.
//!
//! Output pins and the delay append to one shared event log, so a test can replay exactly what the
//! coil lines did and in which order.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

use splitflap::drivers::{ChopTiming, Coil, CoilPins, Phase, PhaseDriver};
use splitflap::motors::{StepSequencer, Stepper};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    A1,
    A2,
    B1,
    B2,
    En1,
    En2,
    Led,
}

impl From<Coil> for Line {
    fn from(coil: Coil) -> Self {
        match coil {
            Coil::A1 => Line::A1,
            Coil::A2 => Line::A2,
            Coil::B1 => Line::B1,
            Coil::B2 => Line::B2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Set(Line, bool),
    DelayUs(u32),
}

pub type EventLog = Rc<RefCell<Vec<Event>>>;

pub fn event_log() -> EventLog {
    Rc::new(RefCell::new(Vec::new()))
}

// --- Pins & delay ---

pub struct MockPin {
    line: Line,
    log: EventLog,
}

impl MockPin {
    pub fn new(line: Line, log: &EventLog) -> Self {
        Self {
            line,
            log: log.clone(),
        }
    }
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_high(&mut self) -> Result<(), Infallible> {
        self.log.borrow_mut().push(Event::Set(self.line, true));
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Infallible> {
        self.log.borrow_mut().push(Event::Set(self.line, false));
        Ok(())
    }
}

pub struct MockDelay {
    log: EventLog,
}

impl MockDelay {
    pub fn new(log: &EventLog) -> Self {
        Self { log: log.clone() }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Event::DelayUs(ns / 1_000));
    }

    fn delay_us(&mut self, us: u32) {
        self.log.borrow_mut().push(Event::DelayUs(us));
    }
}

/// Active-low hall switch whose state comes from a closure returning "at home".
pub struct MockSensor {
    at_home: Box<dyn FnMut() -> bool>,
}

impl MockSensor {
    pub fn new(at_home: impl FnMut() -> bool + 'static) -> Self {
        Self {
            at_home: Box::new(at_home),
        }
    }
}

impl ErrorType for MockSensor {
    type Error = Infallible;
}

impl InputPin for MockSensor {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(!(self.at_home)())
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok((self.at_home)())
    }
}

// --- Motor ---

pub type MockDriver = PhaseDriver<MockPin, MockPin, MockPin, MockPin, MockDelay>;
pub type MockSequencer =
    StepSequencer<MockPin, MockPin, MockPin, MockPin, MockDelay, MockPin, MockPin>;

pub fn mock_driver(log: &EventLog, timing: ChopTiming) -> MockDriver {
    let coils = CoilPins::new(
        MockPin::new(Line::A1, log),
        MockPin::new(Line::A2, log),
        MockPin::new(Line::B1, log),
        MockPin::new(Line::B2, log),
    );
    PhaseDriver::new(coils, MockDelay::new(log), timing)
}

pub fn mock_sequencer(log: &EventLog, timing: ChopTiming) -> MockSequencer {
    StepSequencer::new(
        mock_driver(log, timing),
        MockPin::new(Line::En1, log),
        MockPin::new(Line::En2, log),
    )
}

/// Stepper that only counts, sharing its step count with a drum model.
pub struct FakeStepper {
    steps: Rc<Cell<u32>>,
    phase: Phase,
}

impl FakeStepper {
    pub fn new(steps: &Rc<Cell<u32>>) -> Self {
        Self {
            steps: steps.clone(),
            phase: Phase::default(),
        }
    }
}

impl Stepper for FakeStepper {
    fn step(&mut self) {
        self.phase = self.phase.next();
        self.steps.set(self.steps.get() + 1);
    }

    fn phase(&self) -> Phase {
        self.phase
    }

    fn steps_taken(&self) -> u32 {
        self.steps.get()
    }
}

/// Drum model: the magnet passes the sensor every `steps_per_rev` steps, first after
/// `first_home` steps.
pub fn drum_sensor(steps: &Rc<Cell<u32>>, steps_per_rev: u32, first_home: u32) -> MockSensor {
    let steps = steps.clone();
    MockSensor::new(move || {
        let s = steps.get();
        s >= first_home && (s - first_home) % steps_per_rev == 0
    })
}

// --- Log replay ---

/// Coils whose line is high in `levels`, indexed in `Coil::ALL` order.
pub fn high_coils(levels: &[bool; 4]) -> Vec<Coil> {
    Coil::ALL
        .iter()
        .copied()
        .zip(levels.iter().copied())
        .filter(|&(_, on)| on)
        .map(|(c, _)| c)
        .collect()
}

/// Replay the log and assert the coil lines never form anything but a subset of one phase pair.
pub fn assert_no_illegal_coil_state(events: &[Event]) {
    let mut levels = [false; 4];
    for (i, event) in events.iter().enumerate() {
        if let Event::Set(line, on) = *event {
            let idx = match line {
                Line::A1 => 0,
                Line::A2 => 1,
                Line::B1 => 2,
                Line::B2 => 3,
                _ => continue,
            };
            levels[idx] = on;
            let high = high_coils(&levels);
            assert!(high.len() <= 2, "event {}: {:?} all high", i, high);
            if high.len() == 2 {
                let legal = Phase::ALL
                    .iter()
                    .any(|p| high.iter().all(|&c| p.drives(c)));
                assert!(legal, "event {}: illegal coil pair {:?}", i, high);
            }
        }
    }
}

/// Number of times `line` was driven high.
pub fn rising(events: &[Event], line: Line) -> usize {
    events
        .iter()
        .filter(|e| **e == Event::Set(line, true))
        .count()
}

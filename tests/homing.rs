// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

mod common;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use common::*;
use splitflap::control::home;
use splitflap::hw::{ActiveLevel, HomeSensor, StatusLed};
use splitflap::Error;

#[test]
fn steps_until_sensor_asserts_then_lights_led() {
    let log = event_log();
    let steps = Rc::new(Cell::new(0));
    let mut stepper = FakeStepper::new(&steps);
    let mut sensor = HomeSensor::active_low(drum_sensor(&steps, 255, 42));
    let mut led = StatusLed::active_high(MockPin::new(Line::Led, &log));

    let taken = home(&mut stepper, &mut sensor, &mut led, Some(2040));

    assert_eq!(taken, Ok(42));
    assert_eq!(steps.get(), 42);
    assert!(led.is_on());
}

#[test]
fn already_home_takes_no_steps() {
    let log = event_log();
    let steps = Rc::new(Cell::new(0));
    let mut stepper = FakeStepper::new(&steps);
    let mut sensor = HomeSensor::active_low(drum_sensor(&steps, 255, 0));
    let mut led = StatusLed::active_high(MockPin::new(Line::Led, &log));

    assert_eq!(home(&mut stepper, &mut sensor, &mut led, Some(10)), Ok(0));
    assert_eq!(steps.get(), 0);
    assert!(led.is_on());
}

#[test]
fn led_is_dark_while_stepping() {
    let log = event_log();
    let steps = Rc::new(Cell::new(0));
    let mut stepper = FakeStepper::new(&steps);

    // Record the LED level every time the sensor is sampled.
    let led_log = log.clone();
    let samples = Rc::new(RefCell::new(Vec::new()));
    let sink = samples.clone();
    let counter = steps.clone();
    let mut sensor = HomeSensor::active_low(MockSensor::new(move || {
        let lit = led_log
            .borrow()
            .iter()
            .rev()
            .find_map(|e| match *e {
                Event::Set(Line::Led, on) => Some(on),
                _ => None,
            })
            .unwrap_or(false);
        sink.borrow_mut().push(lit);
        counter.get() == 3
    }));
    let mut led = StatusLed::new(MockPin::new(Line::Led, &log), ActiveLevel::High, true);

    assert_eq!(home(&mut stepper, &mut sensor, &mut led, None), Ok(3));
    assert_eq!(*samples.borrow(), vec![false; 4]);
    assert_eq!(log.borrow().last(), Some(&Event::Set(Line::Led, true)));
}

#[test]
fn gives_up_after_budget_with_led_dark() {
    let log = event_log();
    let steps = Rc::new(Cell::new(0));
    let mut stepper = FakeStepper::new(&steps);
    let mut sensor = HomeSensor::active_low(MockSensor::new(|| false));
    let mut led = StatusLed::new(MockPin::new(Line::Led, &log), ActiveLevel::High, true);

    let result = home(&mut stepper, &mut sensor, &mut led, Some(300));

    assert_eq!(result, Err(Error::SensorTimeout { steps: 300 }));
    assert_eq!(steps.get(), 300);
    assert!(!led.is_on());
}

#[test]
fn zero_budget_fails_without_stepping_unless_home() {
    let log = event_log();
    let steps = Rc::new(Cell::new(0));
    let mut stepper = FakeStepper::new(&steps);
    let mut led = StatusLed::active_high(MockPin::new(Line::Led, &log));

    let mut away = HomeSensor::active_low(MockSensor::new(|| false));
    assert_eq!(
        home(&mut stepper, &mut away, &mut led, Some(0)),
        Err(Error::SensorTimeout { steps: 0 })
    );

    let mut at_home = HomeSensor::active_low(MockSensor::new(|| true));
    assert_eq!(home(&mut stepper, &mut at_home, &mut led, Some(0)), Ok(0));
    assert_eq!(steps.get(), 0);
}

#[test]
fn active_high_sensor_is_honoured() {
    let log = event_log();
    let steps = Rc::new(Cell::new(0));
    let mut stepper = FakeStepper::new(&steps);
    // MockSensor reads low at home, so an active-high wrapper sees home everywhere else.
    let mut sensor = HomeSensor::active_high(drum_sensor(&steps, 255, 0));
    let mut led = StatusLed::active_high(MockPin::new(Line::Led, &log));

    assert_eq!(home(&mut stepper, &mut sensor, &mut led, Some(10)), Ok(1));
}

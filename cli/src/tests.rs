// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use super::{run, CliError, Command, Options};
use num_bigint::BigInt;
use rand::rngs::mock::StepRng;
use structopt::StructOpt;
use tower_math::{fields::Fp2, FieldElement, FieldError};

fn parse(args: &[&str]) -> Options {
    Options::from_iter_safe(std::iter::once("fp2").chain(args.iter().copied()))
        .expect("arguments should parse")
}

fn eval(args: &[&str]) -> Result<Vec<String>, CliError> {
    let options = parse(args);
    run(&options.command, &mut StepRng::new(0, 1))
}

fn fp2(s: &str) -> Fp2 {
    s.parse().unwrap()
}

// ARGUMENT PARSING
// ================================================================================================

#[test]
fn parse_commands() {
    let options = parse(&["mul", "1+2*u", "3"]);
    assert_eq!(0, options.verbose);
    assert_eq!(Command::Mul { x: fp2("1+2*u"), y: fp2("3+0*u") }, options.command);

    let options = parse(&["-vv", "exp", "0+1*u", "-3"]);
    assert_eq!(2, options.verbose);
    assert_eq!("debug", options.log_level());
    assert_eq!(Command::Exp { x: fp2("0+1*u"), k: BigInt::from(-3) }, options.command);

    let options = parse(&["batch-invert", "1", "2", "0"]);
    assert_eq!(
        Command::BatchInvert { values: vec![fp2("1"), fp2("2"), Fp2::ZERO] },
        options.command
    );

    let options = parse(&["random", "-n", "3"]);
    assert_eq!(Command::Random { count: 3 }, options.command);
}

#[test]
fn parse_errors() {
    let args = ["fp2", "mul", "1+2*u", "x"];
    assert!(Options::from_iter_safe(args.iter()).is_err());

    let args = ["fp2", "batch-invert"];
    assert!(Options::from_iter_safe(args.iter()).is_err());

    let args = ["fp2", "cube", "1"];
    assert!(Options::from_iter_safe(args.iter()).is_err());
}

// COMMAND EVALUATION
// ================================================================================================

#[test]
fn arithmetic_commands() {
    let expected = Fp2::from_strs("-5", "10").unwrap().to_string();
    assert_eq!(Ok(vec![expected]), eval(&["mul", "1+2*u", "3+4*u"]));

    assert_eq!(Ok(vec!["1+2*u".to_string()]), eval(&["div", "3+6*u", "3"]));
    assert_eq!(Ok(vec![fp2("1+2*u").inv().to_string()]), eval(&["inv", "1+2*u"]));
    assert_eq!(Ok(vec!["9+0*u".to_string()]), eval(&["exp", "3", "2"]));
    assert_eq!(Ok(vec!["1".to_string()]), eval(&["legendre", "4"]));
    assert_eq!(Ok(vec!["-1".to_string()]), eval(&["legendre", "1+1*u"]));
    assert_eq!(Ok(vec![fp2("1+-2*u").to_string()]), eval(&["conjugate", "1+2*u"]));
    assert_eq!(Ok(vec!["false".to_string()]), eval(&["largest", "1+2*u"]));
}

#[test]
fn sqrt_command() {
    let lines = eval(&["sqrt", "4"]).unwrap();
    assert_eq!(1, lines.len());
    assert_eq!(fp2("4"), fp2(&lines[0]).square());

    assert_eq!(Err(CliError::NotASquare(fp2("1+1*u"))), eval(&["sqrt", "1+1*u"]));
}

#[test]
fn batch_invert_command() {
    let lines = eval(&["batch-invert", "2", "0", "3"]).unwrap();
    let expected = vec![
        fp2("2").inv().to_string(),
        Fp2::ZERO.to_string(),
        fp2("3").inv().to_string(),
    ];
    assert_eq!(expected, lines);
}

#[test]
fn random_command() {
    let lines = eval(&["random", "-n", "4"]).unwrap();
    assert_eq!(4, lines.len());
    for line in lines {
        assert!(line.parse::<Fp2>().is_ok());
    }
}

#[test]
fn field_errors() {
    let err = Err(CliError::Field(FieldError::NotInvertible));
    assert_eq!(err, eval(&["inv", "0"]));
    assert_eq!(err, eval(&["div", "1", "0+0*u"]));
    assert_eq!(err, eval(&["exp", "0", "-1"]));
}

//! This crate provides a small set of probability distributions that are
//! sampled by inverse transform from a uniform `[0, 1)` draw, together with
//! least-squares routines that recover distribution parameters from sampled
//! density data.
//!
//! # Example
//!
//! ```
//! use statfit::distribution::{Binomial, Discrete, DiscreteCDF, InverseTransform};
//! use statfit::statistics::Distribution;
//!
//! let b = Binomial::new(10, 0.5).unwrap();
//! assert_eq!(b.expectation(), 5.0);
//! assert_eq!(b.cdf(10), 1.0);
//! assert_eq!(b.sample(0.5), 5);
//! assert!((b.pmf(5) - 0.24609375).abs() < 1e-12);
//! ```
//!
//! Any [`rand::Rng`] can act as the uniform source, since every distribution
//! also implements [`rand::distributions::Distribution`]:
//!
//! ```
//! use rand::distributions::Distribution;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use statfit::distribution::Cauchy;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let c = Cauchy::new(2.0, 3.0).unwrap();
//! let x: f64 = c.sample(&mut rng);
//! assert!(x.is_finite());
//! ```

#![crate_type = "lib"]
#![crate_name = "statfit"]
#![allow(clippy::excessive_precision)]
#![allow(clippy::many_single_char_names)]
#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate approx;

pub mod distribution;
pub mod fit;
pub mod function;
pub mod statistics;

//! Makefile packaging-target generation for mktargets.
//!
//! # Generation flow
//!
//! ```text
//! mktargets --generate-all
//!   1. Profiles ── built-in table or --profiles FILE
//!   2. Header   ── MAKEFILE_HEADER, once per fragment
//!   3. Stanzas  ── TargetGenerator::render(), one per profile
//!   4. Consumer ── the top Makefile `include`s the fragment
//! ```
//!
//! # Stanza contents
//!
//! Each stanza defines, for one distribution: the Docker image name and
//! stamp-file variables, the shared `docker run` command, the image build
//! rule, the output directory and artifact rules, and the `package-<distro>`
//! / `package-<distro>-interactive` entry points.

pub mod makefile;

pub use makefile::{MAKEFILE_HEADER, TargetGenerator};

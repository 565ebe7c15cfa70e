//! Value enums for CLI arguments

use clap::ValueEnum;

use crate::cloud::ResourceKind;

/// Resource kind selector for created-resource output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Volumes,
    Stacks,
    Projects,
}

impl From<KindArg> for ResourceKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Volumes => ResourceKind::Volumes,
            KindArg::Stacks => ResourceKind::Stacks,
            KindArg::Projects => ResourceKind::Projects,
        }
    }
}

impl std::fmt::Display for KindArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", ResourceKind::from(*self).key())
    }
}

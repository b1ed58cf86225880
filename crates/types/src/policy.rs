//! Scheduling policy selector.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Queueing discipline for a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Policy {
    /// First-come-first-served; bursts run until the job blocks or finishes.
    Fcfs,

    /// Preemptive Round-Robin with a bounded quantum.
    RoundRobin,
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::Fcfs => write!(f, "fcfs"),
            Policy::RoundRobin => write!(f, "round-robin"),
        }
    }
}

impl FromStr for Policy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fcfs" | "f" => Ok(Policy::Fcfs),
            "round-robin" | "roundrobin" | "rr" | "r" => Ok(Policy::RoundRobin),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}

/// Returned when a policy name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown scheduling policy: {0}")]
pub struct UnknownPolicy(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_parse() {
        assert_eq!("fcfs".parse::<Policy>().unwrap(), Policy::Fcfs);
        assert_eq!("RR".parse::<Policy>().unwrap(), Policy::RoundRobin);
        assert_eq!("round-robin".parse::<Policy>().unwrap(), Policy::RoundRobin);
        assert!("lottery".parse::<Policy>().is_err());
    }
}

//! Contains tests which are run on randomly generated problems.

//! Unit tests for the request/response contract.

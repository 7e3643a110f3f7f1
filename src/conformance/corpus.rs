//! Corpus-based conformance testing.
//!
//! Loads known-answer vectors from a JSON corpus and runs them against the
//! implementation. Each vector names an operation, its input, and either an
//! `ok` result or an `err` with the expected error code.

use crate::digest::Digest;
use crate::error::{ErrorCode, OracleResult};
use crate::keccak::{
    permute_with_trace, Lanes, Sha3_256, CAPACITY, DIGEST_SIZE, LANES, RATE, ROUNDS,
};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Corpus manifest with metadata.
#[derive(Debug, Deserialize)]
pub struct CorpusManifest {
    /// Format version of the corpus file.
    pub format_version: String,
    /// Hash algorithm the vectors exercise.
    pub algorithm: String,
    /// Where the expected values come from.
    pub source: String,
}

/// A corpus containing test vectors.
#[derive(Debug, Deserialize)]
pub struct Corpus {
    /// Corpus metadata.
    pub manifest: CorpusManifest,
    /// List of test vectors.
    pub vectors: Vec<TestVector>,
}

/// A single test vector.
#[derive(Debug, Deserialize)]
pub struct TestVector {
    /// Unique identifier for the test.
    pub id: String,
    /// Operation to test (e.g., "sha3_256", "keccak_f").
    pub op: String,
    /// Input parameters for the operation.
    pub input: serde_json::Value,
    /// Expected result (success or error).
    pub expected: serde_json::Value,
}

/// Result of running a single test vector.
#[derive(Debug)]
pub enum TestResult {
    /// Test passed.
    Pass,
    /// Test failed with mismatch.
    Fail {
        /// Expected result from the corpus.
        expected: String,
        /// Actual result from the implementation.
        actual: String,
    },
    /// Test was skipped (operation not known).
    Skip {
        /// Reason for skipping.
        reason: String,
    },
    /// Test errored during execution.
    Error {
        /// Error message.
        message: String,
    },
}

impl TestResult {
    /// Returns true if this is a passing result.
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Returns true if this is a failing result.
    pub fn is_fail(&self) -> bool {
        matches!(self, Self::Fail { .. })
    }

    fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }
}

/// Results from running the corpus.
#[derive(Debug, Default)]
pub struct CorpusResults {
    /// Number of tests that passed.
    pub passed: usize,
    /// Number of tests that failed.
    pub failed: usize,
    /// Number of tests that were skipped.
    pub skipped: usize,
    /// Number of tests that errored.
    pub errors: usize,
    /// Detailed results for each test.
    pub details: Vec<(String, TestResult)>,
}

impl CorpusResults {
    /// Create a new empty results container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a test result.
    pub fn record(&mut self, id: &str, result: TestResult) {
        match &result {
            TestResult::Pass => self.passed += 1,
            TestResult::Fail { .. } => self.failed += 1,
            TestResult::Skip { .. } => self.skipped += 1,
            TestResult::Error { .. } => self.errors += 1,
        }
        self.details.push((id.to_string(), result));
    }

    /// Get total number of tests run.
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.skipped + self.errors
    }

    /// Returns true if all tests passed (no failures or errors).
    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.errors == 0
    }

    /// Get a summary string of the results.
    pub fn summary(&self) -> String {
        format!(
            "{} passed, {} failed, {} skipped, {} errors (total: {})",
            self.passed,
            self.failed,
            self.skipped,
            self.errors,
            self.total()
        )
    }

    /// Get failures only.
    pub fn failures(&self) -> Vec<&(String, TestResult)> {
        self.details
            .iter()
            .filter(|(_, r)| matches!(r, TestResult::Fail { .. }))
            .collect()
    }

    /// Get errors only.
    pub fn error_details(&self) -> Vec<&(String, TestResult)> {
        self.details
            .iter()
            .filter(|(_, r)| matches!(r, TestResult::Error { .. }))
            .collect()
    }
}

/// Corpus runner that executes test vectors.
pub struct CorpusRunner {
    corpus: Corpus,
}

impl CorpusRunner {
    /// Load corpus from a file path.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read corpus file: {}", e))?;
        Self::from_json(&content)
    }

    /// Parse corpus from JSON text.
    pub fn from_json(content: &str) -> Result<Self, String> {
        let corpus: Corpus = serde_json::from_str(content)
            .map_err(|e| format!("Failed to parse corpus JSON: {}", e))?;

        Ok(Self { corpus })
    }

    /// Get the corpus manifest.
    pub fn manifest(&self) -> &CorpusManifest {
        &self.corpus.manifest
    }

    /// Get the number of test vectors.
    pub fn vector_count(&self) -> usize {
        self.corpus.vectors.len()
    }

    /// Run all test vectors and return results.
    pub fn run_all(&self) -> CorpusResults {
        let mut results = CorpusResults::new();

        for vector in &self.corpus.vectors {
            let result = self.run_vector(vector);
            match &result {
                TestResult::Pass => debug!(id = %vector.id, "pass"),
                other => warn!(id = %vector.id, result = ?other, "vector did not pass"),
            }
            results.record(&vector.id, result);
        }

        info!(summary = %results.summary(), "corpus run complete");
        results
    }

    /// Run a single test vector.
    fn run_vector(&self, vector: &TestVector) -> TestResult {
        match vector.op.as_str() {
            "params" => self.run_params(vector),
            "keccak_f" => self.run_keccak_f(vector),
            "sha3_256" => self.run_sha3_256(vector),
            "update_after_finalize" => self.run_update_after_finalize(vector),
            "parse_digest" => self.run_parse_digest(vector),
            _ => TestResult::Skip {
                reason: format!("Unknown operation: {}", vector.op),
            },
        }
    }

    /// Run params test.
    fn run_params(&self, vector: &TestVector) -> TestResult {
        let ok = match vector.expected.get("ok") {
            Some(ok) => ok,
            None => return TestResult::error("Expected 'ok' result for params"),
        };

        let field = |name: &str| ok.get(name).and_then(|v| v.as_u64()).unwrap_or(0) as usize;
        let expected = (
            field("rate"),
            field("capacity"),
            field("rounds"),
            field("digest_size"),
        );
        let actual = (RATE, CAPACITY, ROUNDS, DIGEST_SIZE);

        if expected == actual {
            TestResult::Pass
        } else {
            TestResult::Fail {
                expected: format!(
                    "rate={}, capacity={}, rounds={}, digest={}",
                    expected.0, expected.1, expected.2, expected.3
                ),
                actual: format!(
                    "rate={}, capacity={}, rounds={}, digest={}",
                    actual.0, actual.1, actual.2, actual.3
                ),
            }
        }
    }

    /// Run keccak_f test, localizing the first diverging round if a trace is given.
    fn run_keccak_f(&self, vector: &TestVector) -> TestResult {
        let input = match vector.input.get("lanes").map(parse_lanes) {
            Some(Ok(lanes)) => lanes,
            Some(Err(e)) => return TestResult::Error { message: e },
            None => return TestResult::error("Missing 'lanes' in input"),
        };

        let ok = match vector.expected.get("ok") {
            Some(ok) => ok,
            None => return TestResult::error("Expected 'ok' result for keccak_f"),
        };
        let expected = match ok.get("lanes").map(parse_lanes) {
            Some(Ok(lanes)) => lanes,
            Some(Err(e)) => return TestResult::Error { message: e },
            None => return TestResult::error("Missing 'lanes' in expected"),
        };

        let (actual, traces) = permute_with_trace(&input);

        if let Some(rounds) = ok.get("rounds").and_then(|v| v.as_array()) {
            for (round, expected_round) in rounds.iter().enumerate() {
                let expected_round = match parse_lanes(expected_round) {
                    Ok(lanes) => lanes,
                    Err(e) => return TestResult::Error { message: e },
                };
                match traces.get(round) {
                    Some(actual_round) if *actual_round == expected_round => {}
                    Some(actual_round) => {
                        return TestResult::Fail {
                            expected: format!("round {}: {}", round, lanes_hex(&expected_round)),
                            actual: format!("round {}: {}", round, lanes_hex(actual_round)),
                        };
                    }
                    None => {
                        return TestResult::error(format!("Trace has no round {}", round));
                    }
                }
            }
        }

        if actual == expected {
            TestResult::Pass
        } else {
            TestResult::Fail {
                expected: lanes_hex(&expected),
                actual: lanes_hex(&actual),
            }
        }
    }

    /// Run sha3_256 test.
    fn run_sha3_256(&self, vector: &TestVector) -> TestResult {
        let msg = match message_bytes(&vector.input) {
            Ok(m) => m,
            Err(e) => return TestResult::Error { message: e },
        };
        let chunk = match vector.input.get("chunk").map(|v| v.as_u64()) {
            None => None,
            Some(Some(c)) => Some(usize::try_from(c).unwrap_or(usize::MAX)),
            Some(None) => return TestResult::error("'chunk' must be a non-negative integer"),
        };

        let digest = match hash_chunked(&msg, chunk) {
            Ok(d) => d,
            Err(e) => {
                return TestResult::Fail {
                    expected: "ok".to_string(),
                    actual: format!("err: {}", e),
                };
            }
        };

        match expected_digest(&vector.expected) {
            Ok(expected) if expected == digest => TestResult::Pass,
            Ok(expected) => TestResult::Fail {
                expected: expected.to_hex(),
                actual: digest.to_hex(),
            },
            Err(e) => TestResult::Error { message: e },
        }
    }

    /// Run update_after_finalize test (negative test).
    fn run_update_after_finalize(&self, vector: &TestVector) -> TestResult {
        let msg = match message_bytes(&vector.input) {
            Ok(m) => m,
            Err(e) => return TestResult::Error { message: e },
        };

        let mut hasher = Sha3_256::new();
        if let Err(e) = msg.absorb(&mut hasher, None) {
            return TestResult::error(format!("Initial update failed: {}", e));
        }
        hasher.finalize();
        let result = msg.absorb(&mut hasher, None);

        check_error(&vector.expected, result.map(|_| "ok".to_string()))
    }

    /// Run parse_digest test.
    fn run_parse_digest(&self, vector: &TestVector) -> TestResult {
        let hex_str = match vector.input.get("hex").and_then(|v| v.as_str()) {
            Some(h) => h,
            None => return TestResult::error("Missing 'hex' in input"),
        };

        let result = Digest::from_hex(hex_str);

        if vector.expected.get("ok").is_some() {
            match (result, expected_digest(&vector.expected)) {
                (Ok(d), Ok(e)) if d == e => TestResult::Pass,
                (Ok(d), Ok(e)) => TestResult::Fail {
                    expected: e.to_hex(),
                    actual: d.to_hex(),
                },
                (Err(err), _) => TestResult::Fail {
                    expected: "ok".to_string(),
                    actual: format!("err: {}", err),
                },
                (_, Err(e)) => TestResult::Error { message: e },
            }
        } else {
            check_error(&vector.expected, result.map(|d| d.to_hex()))
        }
    }
}

/// Compare a result against an expected `err` code.
fn check_error(expected: &serde_json::Value, result: OracleResult<String>) -> TestResult {
    let err = match expected.get("err") {
        Some(err) => err,
        None => return TestResult::error("Expected 'err' result for negative test"),
    };
    let expected_code = match err.get("code").and_then(|v| v.as_u64()).map(u32::try_from) {
        Some(Ok(code)) => code,
        Some(Err(_)) => return TestResult::error(format!("Error code out of range: {}", err)),
        None => return TestResult::error("Missing 'err.code' in expected"),
    };

    match result {
        Ok(value) => TestResult::Fail {
            expected: format!("err: {:?}", err),
            actual: format!("ok: {}", value),
        },
        Err(e) if e.code() == expected_code => TestResult::Pass,
        Err(e) => TestResult::Fail {
            expected: format!("E{}", expected_code),
            actual: format!("E{}", e.code()),
        },
    }
}

/// Largest `repeat.count` a vector may ask for (4 GiB of input).
pub const MAX_REPEAT_COUNT: u64 = 1 << 32;

/// Bytes fed per `update` when streaming a repeated message.
const REPEAT_BLOCK: usize = 4096;

/// Message named by a vector's input.
#[derive(Debug, PartialEq, Eq)]
enum Message {
    /// Literal bytes from `msg`.
    Bytes(Vec<u8>),
    /// `count` copies of `byte`, never held in memory at once.
    Repeat { byte: u8, count: u64 },
}

impl Message {
    /// Feed the message to `hasher`, `chunk` bytes per `update` when given.
    ///
    /// At least one `update` call is always made, even for an empty message.
    /// Repeated messages are fed in pieces of at most [`REPEAT_BLOCK`] bytes.
    fn absorb(&self, hasher: &mut Sha3_256, chunk: Option<usize>) -> OracleResult<()> {
        let size = match chunk {
            Some(0) => return Err(ErrorCode::E105_InvalidChunkSize),
            Some(size) => size,
            None => usize::MAX,
        };

        match self {
            Self::Bytes(msg) if msg.is_empty() => hasher.update(msg),
            Self::Bytes(msg) => {
                for part in msg.chunks(size) {
                    hasher.update(part)?;
                }
                Ok(())
            }
            Self::Repeat { byte, count } => {
                let block = [*byte; REPEAT_BLOCK];
                let step = size.min(REPEAT_BLOCK);
                let mut remaining = *count;
                loop {
                    let take = usize::try_from(remaining).map_or(step, |r| r.min(step));
                    hasher.update(&block[..take])?;
                    remaining -= take as u64;
                    if remaining == 0 {
                        return Ok(());
                    }
                }
            }
        }
    }
}

/// Read the message from `msg` (hex) or `repeat` ({byte, count}).
fn message_bytes(input: &serde_json::Value) -> Result<Message, String> {
    if let Some(msg) = input.get("msg").and_then(|v| v.as_str()) {
        return hex::decode(msg)
            .map(Message::Bytes)
            .map_err(|e| format!("Invalid hex: {}", e));
    }

    if let Some(repeat) = input.get("repeat") {
        let byte_hex = repeat
            .get("byte")
            .and_then(|v| v.as_str())
            .ok_or_else(|| "Missing 'repeat.byte' in input".to_string())?;
        let count = repeat
            .get("count")
            .and_then(|v| v.as_u64())
            .ok_or_else(|| "Missing 'repeat.count' in input".to_string())?;
        if count > MAX_REPEAT_COUNT {
            return Err(format!("repeat.count {} exceeds limit {}", count, MAX_REPEAT_COUNT));
        }
        let byte = u8::from_str_radix(byte_hex, 16)
            .map_err(|e| format!("Invalid repeat byte: {}", e))?;
        return Ok(Message::Repeat { byte, count });
    }

    Err("Missing 'msg' or 'repeat' in input".to_string())
}

/// Hash `msg` in one update, or in `chunk`-sized updates when given.
fn hash_chunked(msg: &Message, chunk: Option<usize>) -> OracleResult<Digest> {
    let mut hasher = Sha3_256::new();
    msg.absorb(&mut hasher, chunk)?;
    Ok(hasher.finalize())
}

/// Read `expected.ok.digest`.
fn expected_digest(expected: &serde_json::Value) -> Result<Digest, String> {
    let hex_str = expected
        .get("ok")
        .and_then(|ok| ok.get("digest"))
        .and_then(|v| v.as_str())
        .ok_or_else(|| "Missing 'ok.digest' in expected".to_string())?;
    Digest::from_hex(hex_str).map_err(|e| format!("Invalid expected digest: {}", e))
}

/// Parse 25 lanes given as hex strings (most significant digit first).
fn parse_lanes(value: &serde_json::Value) -> Result<Lanes, String> {
    let arr = value
        .as_array()
        .ok_or_else(|| "Lanes must be an array".to_string())?;
    if arr.len() != LANES {
        return Err(format!("Expected {} lanes, got {}", LANES, arr.len()));
    }

    let mut lanes = [0u64; LANES];
    for (lane, item) in lanes.iter_mut().zip(arr) {
        let s = item
            .as_str()
            .ok_or_else(|| "Lane is not a string".to_string())?;
        let s = s.strip_prefix("0x").unwrap_or(s);
        *lane = u64::from_str_radix(s, 16).map_err(|e| format!("Invalid lane: {}", e))?;
    }
    Ok(lanes)
}

fn lanes_hex(lanes: &Lanes) -> String {
    lanes
        .iter()
        .map(|l| format!("{:016x}", l))
        .collect::<Vec<_>>()
        .join(" ")
}

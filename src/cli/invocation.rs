use crate::error::BecryptError;

const HELP_TOKENS: [&str; 3] = ["help", "-h", "--help"];
const COST_TOKENS: [&str; 3] = ["cost", "-c", "--cost"];
const QUIET_TOKENS: [&str; 2] = ["-q", "--quiet"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    ReportCost { hash: String },
    CheckPassword { hash: String },
    GenerateHash { cost: u32 },
}

/// What this run of the tool should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    /// Suppress the `yes`/`no` token of a check.
    pub quiet: bool,
}

/// Interpreter state between tokens.
#[derive(Debug)]
enum State {
    None,
    Cost { hash: Option<String> },
    Check { hash: Option<String>, quiet: bool },
    Generate { cost: u32 },
}

/// Whether any token asks for help, which overrides everything else.
pub fn wants_help<S: AsRef<str>>(args: &[S]) -> bool {
    args.iter().any(|a| HELP_TOKENS.contains(&a.as_ref()))
}

impl Invocation {
    /// Resolves the tokens following the program name.
    pub fn parse<I, S>(args: I, default_cost: u32) -> Result<Self, BecryptError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<S> = args.into_iter().collect();

        if wants_help(&args) {
            return Ok(Invocation {
                command: Command::Help,
                quiet: false,
            });
        }

        let mut state = State::None;
        for arg in &args {
            state = state.next(arg.as_ref())?;
        }

        let invocation = match state {
            State::None => Invocation {
                command: Command::GenerateHash { cost: default_cost },
                quiet: false,
            },
            State::Generate { cost } => Invocation {
                command: Command::GenerateHash { cost },
                quiet: false,
            },
            State::Cost { hash: Some(hash) } => Invocation {
                command: Command::ReportCost { hash },
                quiet: false,
            },
            State::Cost { hash: None } => {
                return Err(BecryptError::usage("Missing hash argument for cost"))
            }
            State::Check {
                hash: Some(hash),
                quiet,
            } => Invocation {
                command: Command::CheckPassword { hash },
                quiet,
            },
            State::Check { hash: None, .. } => {
                return Err(BecryptError::usage("Missing hash argument to check against"))
            }
        };
        log::debug!("Resolved invocation: {:?}", invocation);
        Ok(invocation)
    }
}

impl State {
    fn next(self, arg: &str) -> Result<State, BecryptError> {
        match self {
            State::None => Ok(if COST_TOKENS.contains(&arg) {
                State::Cost { hash: None }
            } else if let Some(cost) = parse_cost(arg)? {
                State::Generate { cost }
            } else if QUIET_TOKENS.contains(&arg) {
                State::Check {
                    hash: None,
                    quiet: true,
                }
            } else {
                State::Check {
                    hash: Some(arg.to_string()),
                    quiet: false,
                }
            }),
            State::Cost { hash: None } => Ok(State::Cost {
                hash: Some(arg.to_string()),
            }),
            State::Cost { hash: Some(_) } => {
                Err(BecryptError::usage("Too many arguments for cost"))
            }
            State::Check { hash, .. } if QUIET_TOKENS.contains(&arg) => {
                Ok(State::Check { hash, quiet: true })
            }
            State::Check { hash: None, quiet } => Ok(State::Check {
                hash: Some(arg.to_string()),
                quiet,
            }),
            State::Check { hash: Some(_), .. } => {
                Err(BecryptError::usage("Too many arguments for check"))
            }
            State::Generate { .. } => Err(BecryptError::usage("Too many arguments for hash")),
        }
    }
}

/// Non-negative integers select hash generation. Ones too large for `u32`
/// can never be a valid cost and are rejected as typed.
fn parse_cost(arg: &str) -> Result<Option<u32>, BecryptError> {
    if arg.is_empty() || !arg.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(None);
    }
    arg.parse()
        .map(Some)
        .map_err(|_| BecryptError::CostOutOfRange(arg.to_string()))
}

use core::fmt;

/// A shell command name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verb {
    Help,
    Ls,
    Cat,
    Pwd,
    Cd,
    Echo,
    Scan,
    Connect,
    Disconnect,
    Rm,
    ChangeAuth,
    Run,
    Mem,
    Clear,
    Whoami,
    Save,
    Load,
    Reset,
}

impl Verb {
    /// All verbs in the order `help` lists them.
    pub const ALL: [Verb; 18] = [
        Verb::Help,
        Verb::Ls,
        Verb::Cat,
        Verb::Pwd,
        Verb::Cd,
        Verb::Echo,
        Verb::Scan,
        Verb::Connect,
        Verb::Disconnect,
        Verb::Rm,
        Verb::ChangeAuth,
        Verb::Run,
        Verb::Mem,
        Verb::Clear,
        Verb::Whoami,
        Verb::Save,
        Verb::Load,
        Verb::Reset,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Verb::Help => "help",
            Verb::Ls => "ls",
            Verb::Cat => "cat",
            Verb::Pwd => "pwd",
            Verb::Cd => "cd",
            Verb::Echo => "echo",
            Verb::Scan => "scan",
            Verb::Connect => "connect",
            Verb::Disconnect => "disconnect",
            Verb::Rm => "rm",
            Verb::ChangeAuth => "changeAuth",
            Verb::Run => "run",
            Verb::Mem => "mem",
            Verb::Clear => "clear",
            Verb::Whoami => "whoami",
            Verb::Save => "save",
            Verb::Load => "load",
            Verb::Reset => "reset",
        }
    }

    /// Look up a verb by its exact name.
    pub fn parse(token: &str) -> Option<Verb> {
        Self::ALL.into_iter().find(|verb| verb.name() == token)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

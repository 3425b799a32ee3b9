use core::fmt;

/// A tool launched by `run`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Program {
    Ping,
    Tracer,
}

impl Program {
    pub const ALL: [Program; 2] = [Program::Ping, Program::Tracer];

    pub fn name(self) -> &'static str {
        match self {
            Program::Ping => "ping",
            Program::Tracer => "tracer",
        }
    }

    /// Memory held while the program runs, in MB.
    pub fn memory_cost(self) -> u32 {
        match self {
            Program::Ping => 128,
            Program::Tracer => 256,
        }
    }

    pub fn parse(name: &str) -> Option<Program> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

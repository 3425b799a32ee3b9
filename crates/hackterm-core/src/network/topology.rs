//! Network arena and its builder.

use core::fmt;

use super::computer::Computer;

/// Index of a computer in its [`Network`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComputerId(usize);

impl fmt::Display for ComputerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "computer#{}", self.0)
    }
}

/// All computers of a game world and who links to whom.
///
/// Ids come only from [`NetworkBuilder::add`], so indexing by a
/// [`ComputerId`] of this network never goes out of bounds.
///
/// # Panics
///
/// [`computer`](Self::computer), [`computer_mut`](Self::computer_mut) and
/// [`linked`](Self::linked) panic on an id handed out by another, larger
/// network. Use [`get`](Self::get) when the id's origin is unknown.
#[derive(Clone, Debug)]
pub struct Network {
    computers: Vec<Computer>,
    links: Vec<Vec<ComputerId>>,
}

impl Network {
    pub fn builder() -> NetworkBuilder {
        NetworkBuilder::default()
    }

    /// The computer behind `id`, or `None` if it is not from this network.
    pub fn get(&self, id: ComputerId) -> Option<&Computer> {
        self.computers.get(id.0)
    }

    pub fn contains(&self, id: ComputerId) -> bool {
        id.0 < self.computers.len()
    }

    pub fn computer(&self, id: ComputerId) -> &Computer {
        &self.computers[id.0]
    }

    pub fn computer_mut(&mut self, id: ComputerId) -> &mut Computer {
        &mut self.computers[id.0]
    }

    /// Computers reachable from `id`, in link order.
    pub fn linked(&self, id: ComputerId) -> &[ComputerId] {
        &self.links[id.0]
    }

    /// First computer linked to `from` with this address and name that
    /// accepts `password`.
    pub fn find_linked(&self, from: ComputerId, ip: &str, name: &str, password: &str) -> Option<ComputerId> {
        self.linked(from).iter().copied().find(|id| {
            let computer = self.computer(*id);
            computer.matches(ip, name) && computer.accepts(password)
        })
    }

    pub fn len(&self) -> usize {
        self.computers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.computers.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = ComputerId> {
        (0..self.computers.len()).map(ComputerId)
    }
}

/// Collects computers, then links them in one explicit pass.
#[derive(Default)]
pub struct NetworkBuilder {
    computers: Vec<Computer>,
    links: Vec<Vec<ComputerId>>,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, computer: Computer) -> ComputerId {
        let id = ComputerId(self.computers.len());
        self.computers.push(computer);
        self.links.push(Vec::new());
        id
    }

    /// Link `a` and `b` in both directions.
    ///
    /// Links are keyed by the (address, name) pair: if `a` already sees a
    /// computer with `b`'s pair, nothing changes on either side. Self links
    /// are ignored.
    pub fn link(&mut self, a: ComputerId, b: ComputerId) -> &mut Self {
        if a == b || self.sees(a, b) {
            return self;
        }
        self.links[a.0].push(b);
        if !self.sees(b, a) {
            self.links[b.0].push(a);
        }
        self
    }

    fn sees(&self, from: ComputerId, to: ComputerId) -> bool {
        let target = &self.computers[to.0];
        self.links[from.0]
            .iter()
            .any(|id| self.computers[id.0].matches(target.address().as_str(), target.name()))
    }

    pub fn build(self) -> Network {
        Network {
            computers: self.computers,
            links: self.links,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host(ip: &str, name: &str) -> Computer {
        Computer::new(ip, name).unwrap()
    }

    #[test]
    fn test_link_is_symmetric() {
        let mut builder = NetworkBuilder::new();
        let a = builder.add(host("10.0.0.1", "a"));
        let b = builder.add(host("10.0.0.2", "b"));
        let c = builder.add(host("10.0.0.3", "c"));
        builder.link(a, b).link(c, a);
        let network = builder.build();

        assert_eq!(network.linked(a), &[b, c]);
        assert_eq!(network.linked(b), &[a]);
        assert_eq!(network.linked(c), &[a]);
    }

    #[test]
    fn test_foreign_id() {
        let mut big = NetworkBuilder::new();
        big.add(host("10.0.0.1", "a"));
        let foreign = big.add(host("10.0.0.2", "b"));

        let mut small = NetworkBuilder::new();
        let only = small.add(host("10.0.0.3", "c"));
        let network = small.build();

        assert!(network.contains(only));
        assert!(!network.contains(foreign));
        assert!(network.get(foreign).is_none());
        assert_eq!(network.get(only).map(Computer::name), Some("c"));
    }

    #[test]
    #[should_panic]
    fn test_foreign_id_panics_on_index() {
        let mut big = NetworkBuilder::new();
        big.add(host("10.0.0.1", "a"));
        let foreign = big.add(host("10.0.0.2", "b"));

        let mut small = NetworkBuilder::new();
        small.add(host("10.0.0.3", "c"));
        small.build().computer(foreign);
    }

    #[test]
    fn test_relink_is_noop() {
        let mut builder = NetworkBuilder::new();
        let a = builder.add(host("10.0.0.1", "a"));
        let b = builder.add(host("10.0.0.2", "b"));
        builder.link(a, b).link(a, b).link(b, a).link(a, a);
        let network = builder.build();

        assert_eq!(network.linked(a), &[b]);
        assert_eq!(network.linked(b), &[a]);
    }

    #[test]
    fn test_dedupe_by_address_and_name() {
        let mut builder = NetworkBuilder::new();
        let a = builder.add(host("10.0.0.1", "a"));
        let b = builder.add(host("10.0.0.2", "b"));
        let twin = builder.add(host("10.0.0.2", "b"));
        builder.link(a, b).link(a, twin);
        let network = builder.build();

        assert_eq!(network.linked(a), &[b]);
        assert!(network.linked(twin).is_empty());
    }

    #[test]
    fn test_find_linked() {
        let mut builder = NetworkBuilder::new();
        let home = builder.add(host("10.0.0.1", "home"));
        let locked = builder.add(host("10.0.0.2", "locked").with_password("pw"));
        let open = builder.add(host("10.0.0.3", "open"));
        let far = builder.add(host("10.0.0.4", "far"));
        builder.link(home, locked).link(home, open).link(open, far);
        let network = builder.build();

        assert_eq!(network.find_linked(home, "10.0.0.2", "locked", "pw"), Some(locked));
        assert_eq!(network.find_linked(home, "10.0.0.2", "locked", "nope"), None);
        assert_eq!(network.find_linked(home, "10.0.0.3", "open", "whatever"), Some(open));
        assert_eq!(network.find_linked(home, "10.0.0.3", "OPEN", ""), None);
        // Not a direct neighbour
        assert_eq!(network.find_linked(home, "10.0.0.4", "far", ""), None);
        assert_eq!(network.len(), 4);
    }
}

use clap::Parser;

/// Knobs for one table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct TableConfig {
    /// Deal the villain a two-card hand as well; `V` then moves it with the role.
    pub deal_villain_hand: bool,
    /// Seed for the table RNG; `None` draws one from the thread RNG.
    pub seed: Option<u64>,
}

impl TableConfig {
    pub fn with_villain_hand(mut self, on: bool) -> Self {
        self.deal_villain_hand = on;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Walk a hold'em hand street by street: hero vs villain at a nine-seat table.
#[derive(Debug, Clone, Parser)]
#[command(name = "poker-drill", version, about)]
pub struct Args {
    /// Seed the deck and seat picks for a reproducible session.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Deal the villain a hand too.
    #[arg(long)]
    pub villain_hand: bool,
    /// Use the line prompt even when attached to a terminal.
    #[arg(long)]
    pub plain: bool,
}

impl Args {
    pub fn table_config(&self) -> TableConfig {
        TableConfig { deal_villain_hand: self.villain_hand, seed: self.seed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_hero_only_and_unseeded() {
        let args = Args::parse_from(["poker-drill"]);
        assert!(!args.plain);
        assert_eq!(args.table_config(), TableConfig::default());
    }

    #[test]
    fn flags_reach_the_table_config() {
        let args = Args::parse_from(["poker-drill", "--seed", "9", "--villain-hand", "--plain"]);
        assert!(args.plain);
        assert_eq!(args.table_config(), TableConfig::default().with_seed(9).with_villain_hand(true));
    }

    #[test]
    fn bad_seed_is_rejected() {
        assert!(Args::try_parse_from(["poker-drill", "--seed", "abc"]).is_err());
    }
}

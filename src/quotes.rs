use crate::output::OutputSink;
use crate::random::Deviate;

pub const QUOTES: [&str; 8] = [
    "I've had to learn to fight all my life – got to learn to keep smiling. If you smile things will work out. - Serena Williams",
    "Nothing is worth more than laughter. It is strength to laugh and to abandon oneself, to be light. – Frida Kahlo",
    "You cannot shake hands with a clenched fist. – Indira Gandhi",
    "There's power in allowing yourself to be known and heard, in owning your unique story, in using your authentic voice. – Michelle Obama",
    "No one can make you feel inferior without your consent. – Eleanor Roosevelt",
    "Pursuing peace means rising above one's own wants, needs, and emotions. – Benazir Bhutto",
    "Let us make our future now, and let us make our dreams tomorrow’s reality. – Malala Yousafzai",
    "I’ve learned that making a ‘living’ is not the same as ‘making a life.’ – Maya Angelou",
];

/// Picks `pool[floor(u * len)]` for one deviate `u`. `None` for an empty pool.
pub fn pick_quote<'a, T>(pool: &'a [T], deviate: &mut impl Deviate) -> Option<&'a T> {
    if pool.is_empty() {
        return None;
    }
    let index = (deviate.next_deviate() * pool.len() as f64).floor() as usize;
    pool.get(index.min(pool.len() - 1))
}

pub fn quote_line(quote: &str) -> String {
    format!("Our quote is:  {}", quote)
}

/// Picks one quote from [`QUOTES`] and prints it.
pub fn run_quote(deviate: &mut impl Deviate, sink: &dyn OutputSink) -> Option<&'static str> {
    let quote = pick_quote(&QUOTES, deviate).copied()?;
    log::debug!("Picked quote {:?}", quote);
    sink.line(&quote_line(quote));
    Some(quote)
}

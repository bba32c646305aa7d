//! Example demonstrating bounded generation and shrink candidates.

use inrange::*;

fn main() {
    println!("Integer domain [-100, 100]");
    let mut int_gen = match IntGen::with_range(InRange::between(-100, 100)) {
        Ok(generator) => generator,
        Err(error) => {
            eprintln!("configuration failed: {error}");
            return;
        }
    };
    let mut rng = SplitMix::from_u64(7);
    let samples: Vec<i32> = (0..5).map(|_| int_gen.generate(&mut rng)).collect();
    println!("  samples: {samples:?}");
    println!("  shrink(80):  {:?}", int_gen.shrink(80));
    println!("  shrink(-80): {:?}", int_gen.shrink(-80));
    println!("  shrink(0):   {:?}", int_gen.shrink(0));
    println!();

    println!("Seeded short generator (seed 42)");
    match ShortGen::with_range(InRange::new().with_seed(42)) {
        Ok(mut short_gen) => {
            let domain = short_gen.domain();
            println!("  window: [{}, {}]", domain.min(), domain.max());
            let first = short_gen.generate(&mut rng);
            let second = short_gen.generate(&mut rng);
            println!("  first draw: {first}, second draw: {second}");
        }
        Err(error) => eprintln!("configuration failed: {error}"),
    }
    println!();

    println!("Character domain ['a', 'z']");
    match CharGen::with_range(InRange::<char>::new().with_min_text("a").with_max_text("z")) {
        Ok(char_gen) => println!("  shrink('q'): {:?}", char_gen.shrink('q')),
        Err(error) => eprintln!("configuration failed: {error}"),
    }
    println!();

    println!("Malformed bound");
    if let Err(error) = IntGen::with_range(InRange::new().with_max_text("lots")) {
        println!("  {error}");
    }
}

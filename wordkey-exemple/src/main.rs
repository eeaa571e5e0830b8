use wordkey_core::generator::Randomizer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A randomizer holds its own configuration; no global state.
    // With nothing configured it uses the default language ("id"),
    // the bundled wordset file and the built-in punctuation set.
    let mut randomizer = Randomizer::new();

    // List the supported languages
    for language in Randomizer::available_languages() {
        println!("Supported language: {}", language);
    }
    println!("Active language: {}", randomizer.language());

    // Generate a few keys with the conventional counts (3 words, 3 marks)
    for i in 0..5 {
        let key = randomizer.generate(
            Randomizer::DEFAULT_WORD_COUNT,
            Randomizer::DEFAULT_PUNCT_COUNT,
        )?;
        println!("Generated key {}: {}", i + 1, key);
    }

    // Switch to the English wordset
    randomizer.set_language("en")?;
    println!("Generated (en): {}", randomizer.generate(3, 2)?);

    // Attempting to select a language outside the supported set
    match randomizer.set_language("sp") {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("This language ('sp') is not supported: {}", e),
    }

    // A custom wordset and punctuation set override the defaults
    // until replaced or reset
    randomizer.set_custom_wordset(vec![
        "saya".to_owned(),
        "oke".to_owned(),
        "juga".to_owned(),
        "baiklah".to_owned(),
    ]);
    randomizer.set_custom_punctset(vec!["?".to_owned(), ";".to_owned(), "~".to_owned()]);
    println!("Generated (custom sets): {}", randomizer.generate(3, 2)?);

    // Counts must be at least 1
    match randomizer.generate(0, 2) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("A zero word count is invalid: {}", e),
    }

    // Requesting more distinct words than the wordset holds fails,
    // the words are sampled without replacement
    match randomizer.generate(5, 2) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("5 words out of a 4-word set is invalid: {}", e),
    }

    // Back to the default configuration
    randomizer.reset();
    println!("Generated (after reset): {}", randomizer.generate(3, 3)?);

    Ok(())
}

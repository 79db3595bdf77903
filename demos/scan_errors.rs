//! Demonstrate that scanning keeps going past lexical errors.

fn main() {
    let source = "var price = 9.99;\nprint price @ 2;\nvar name = \"unclosed\n";
    let result = lox_scanner::scan(source);

    for error in &result.errors {
        println!("Diagnostic: {error}");
        println!("  Kind: {:?}", error.kind);
        println!("  Line: {}", error.line);
    }

    println!();

    for token in &result.tokens {
        println!("{token}");
    }

    println!();
    println!("exit code would be {}", result.exit_code());
}

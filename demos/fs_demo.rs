//! Example demonstrating the Filesystem Session Service
//!
//! This example shows how to drive an in-memory filesystem session from a
//! command handler: creating directories and files, navigating with
//! relative and absolute paths, and removing entries.

use cli_console::CommandHandler;

fn main() {
    println!("=== Filesystem Session Demo ===\n");

    // Create a command handler (one user session, one tree)
    let mut handler = CommandHandler::new();

    println!("1. Creating directory structure...");
    handler.mkdir("home").expect("Failed to create home");
    handler.mkdir("home/docs").expect("Failed to create docs");
    println!("   ✓ Created: /home");
    println!("   ✓ Created: /home/docs\n");

    println!("2. Creating a file and navigating to it...");
    handler
        .touch("home/docs/hola.txt")
        .expect("Failed to create hola.txt");
    handler.cd("home/docs").expect("Failed to cd");
    println!("   pwd: {}", handler.pwd());
    for entry in handler.ls() {
        println!("   - {}", entry);
    }
    println!();

    println!("3. Walking back up with '..'...");
    handler.cd("..").expect("Failed to cd ..");
    println!("   pwd: {}", handler.pwd());
    handler.cd("..").expect("Failed to cd ..");
    println!("   pwd: {}", handler.pwd());
    handler.cd("..").expect("'..' at root should be a no-op");
    println!("   pwd after '..' at root: {}\n", handler.pwd());

    println!("4. Absolute paths...");
    handler.mkdir("/files").expect("Failed to create /files");
    handler
        .touch("/files/test.txt")
        .expect("Failed to create test.txt");
    handler.cd("/files").expect("Failed to cd /files");
    println!("   pwd: {}", handler.pwd());
    for entry in handler.ls() {
        println!("   - {}", entry);
    }
    println!();

    println!("5. Inspecting an entry...");
    let stat = handler.stat("test.txt").expect("Failed to stat");
    println!("{}", stat);

    println!("6. Removing a file...");
    handler.rm("test.txt").expect("Failed to remove");
    println!("   /files now holds {} entries\n", handler.ls().len());

    println!("7. Errors are reported, not swallowed...");
    match handler.cd("doesnotexist") {
        Ok(_) => println!("   unexpected success"),
        Err(e) => println!("   {}", e),
    }
    println!();

    println!("=== Demo Complete ===");
    println!("\nKey Points:");
    println!("✓ No global filesystem - each handler owns its own tree");
    println!("✓ One resolution algorithm behind every operation");
    println!("✓ The cursor can never dangle");
}

use skills_backend::utils::password::PasswordManager;
use std::env;
use std::io::{self, Write};
use std::process;

fn read_password() -> io::Result<String> {
    let args: Vec<String> = env::args().collect();

    if let Some(password) = args.get(1) {
        // コマンドライン引数からパスワードを取得
        return Ok(password.clone());
    }

    // インタラクティブにパスワードを入力
    print!("Enter password to hash: ");
    io::stdout().flush()?;

    let mut password = String::new();
    io::stdin().read_line(&mut password)?;
    Ok(password.trim().to_string())
}

fn main() {
    let password = match read_password() {
        Ok(password) => password,
        Err(e) => {
            eprintln!("Error reading password: {}", e);
            process::exit(1);
        }
    };

    if password.is_empty() {
        eprintln!("Error: Password cannot be empty");
        process::exit(1);
    }

    let manager = match PasswordManager::from_env() {
        Ok(manager) => manager,
        Err(e) => {
            eprintln!("Error configuring password hasher: {}", e);
            process::exit(1);
        }
    };

    // サーバーと同じ Argon2 設定・パスワード要件でハッシュ生成
    match manager.hash_password(&password) {
        Ok(password_hash) => {
            println!("\n=== Password Hash Generated ===");
            println!("Hash: {}", password_hash);
            println!("\nTo seed a user by hand:");
            println!(
                "INSERT INTO users (username, password_hash, email_id, role, created_at) \
                 VALUES ('<username>', '{}', '<email>', 'user', NOW());",
                password_hash
            );
        }
        Err(e) => {
            eprintln!("Error generating password hash: {}", e);
            process::exit(1);
        }
    }
}

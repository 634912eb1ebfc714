use dilithium_core::{Keypair, SecurityLevel};

fn main() {
    let message = b"example Dilithium signing message";
    let keypair = Keypair::random(SecurityLevel::Level2);
    let signature = keypair.secret.sign(message);
    assert!(keypair.public.verify(message, &signature));

    println!(
        "Public key rho seed: {:02X?}",
        &keypair.public.as_bytes()[..32]
    );
    println!(
        "Signature is {} bytes at level {:?}",
        signature.len(),
        keypair.public.level()
    );
}

use eddsa::{Signature, SigningKey, VerifyingKey};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let random_sk = SigningKey::random(&mut rng);
    let random_vk = VerifyingKey::try_from(&random_sk).expect("derive random vk");
    println!("random public key: {}", hex::encode(random_vk.as_bytes()));

    let secret: [u8; 32] = core::array::from_fn(|i| i as u8);
    let sk = SigningKey::from_bytes(&secret);
    let vk = VerifyingKey::try_from(&sk).expect("derive vk");

    let sk_bytes = bincode::serialize(&sk).expect("serialize sk");
    let vk_bytes = bincode::serialize(&vk).expect("serialize vk");

    let msg = b"Hello, world! This is a test.";
    let sig = sk.sign(msg).expect("sign");
    let sig_bytes = bincode::serialize(&sig).expect("serialize sig");

    let sk2: SigningKey = bincode::deserialize(&sk_bytes).expect("deserialize sk");
    let vk2: VerifyingKey = bincode::deserialize(&vk_bytes).expect("deserialize vk");
    let sig2: Signature = bincode::deserialize(&sig_bytes).expect("deserialize sig");

    vk2.verify(msg, &sig2).expect("verify");
    assert_eq!(sk2.sign(msg).expect("sign"), sig2);

    println!("public key: {}", hex::encode(vk2.as_bytes()));
    println!("signature:  {}", hex::encode(sig2.to_bytes()));
}

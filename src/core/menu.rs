use crate::core::MenuItem;

/// Account actions shown on the dashboard, in display order.
///
/// The `id` values are referenced by saved bookmarks and links, so they must
/// never be renamed or reused.
pub static MENU_ITEMS: &[MenuItem] = &[
    MenuItem {
        id: "account",
        label: "Login/Ganti akun",
        description: "Kelola akun XL dan refresh token tersimpan.",
        icon: "\u{1F464}",
    },
    MenuItem {
        id: "packages",
        label: "Lihat Paket Saya",
        description: "Lihat paket aktif beserta detail kuota.",
        icon: "\u{1F4E6}",
    },
    MenuItem {
        id: "hot",
        label: "Beli Paket \u{1F525} HOT",
        description: "Promo paket terpanas pilihan MyXL.",
        icon: "\u{1F525}",
    },
    MenuItem {
        id: "hot2",
        label: "Beli Paket \u{1F525} HOT-2",
        description: "Alternatif rekomendasi paket populer.",
        icon: "\u{1F31F}",
    },
    MenuItem {
        id: "option-code",
        label: "Beli Paket Berdasarkan Option Code",
        description: "Beli paket menggunakan kode opsi khusus.",
        icon: "\u{1F522}",
    },
    MenuItem {
        id: "family-code",
        label: "Beli Paket Berdasarkan Family Code",
        description: "Temukan paket dari family code tertentu.",
        icon: "\u{1F511}",
    },
    MenuItem {
        id: "loop",
        label: "Beli Semua Paket di Family Code",
        description: "Otomatis beli semua opsi dalam family code.",
        icon: "\u{1F501}",
    },
    MenuItem {
        id: "transactions",
        label: "Riwayat Transaksi",
        description: "Pantau pembelian paket dan histori transaksi.",
        icon: "\u{1F4C4}",
    },
    MenuItem {
        id: "family-plan",
        label: "Family Plan/Akrab Organizer",
        description: "Kelola grup Akrab & family plan XL.",
        icon: "\u{1F46A}",
    },
    MenuItem {
        id: "circle",
        label: "Circle",
        description: "Akses fitur circle untuk komunitas.",
        icon: "\u{1F9ED}",
    },
    MenuItem {
        id: "store-segments",
        label: "Store Segments",
        description: "Lihat segmen store dan penawaran khusus.",
        icon: "\u{1F6CD}\u{FE0F}",
    },
    MenuItem {
        id: "store-family",
        label: "Store Family List",
        description: "Eksplorasi daftar family di store.",
        icon: "\u{1F5C2}\u{FE0F}",
    },
    MenuItem {
        id: "store-packages",
        label: "Store Packages",
        description: "Cari paket di katalog store.",
        icon: "\u{1F4E6}",
    },
    MenuItem {
        id: "redeemables",
        label: "Redemables",
        description: "Daftar hadiah yang bisa ditukar.",
        icon: "\u{1F381}",
    },
    MenuItem {
        id: "register",
        label: "Register",
        description: "Registrasi nomor baru dengan dukcapil.",
        icon: "\u{1F4DD}",
    },
    MenuItem {
        id: "notifications",
        label: "Notifikasi",
        description: "Kelola notifikasi dan pesan terbaru.",
        icon: "\u{1F514}",
    },
    MenuItem {
        id: "validate",
        label: "Validate msisdn",
        description: "Validasi msisdn untuk memastikan akun.",
        icon: "\u{2705}",
    },
    MenuItem {
        id: "bookmark",
        label: "Bookmark Paket",
        description: "Simpan paket favorit untuk akses cepat.",
        icon: "\u{1F516}",
    },
    MenuItem {
        id: "exit",
        label: "Tutup aplikasi",
        description: "Keluar dari aplikasi dengan aman.",
        icon: "\u{1F6AA}",
    },
];

pub fn menu_items() -> &'static [MenuItem] {
    MENU_ITEMS
}

pub fn find_menu_item(id: &str) -> Option<&'static MenuItem> {
    MENU_ITEMS.iter().find(|item| item.id == id)
}
